/// Viewport width (CSS px) from which the sidebar starts expanded.
pub const LG_BREAKPOINT_PX: f64 = 1024.0;

/// Open/closed state of the navigation sidebar. Lives only in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub expanded: bool,
}

impl SidebarState {
    /// Initial state for a viewport; unknown widths start collapsed.
    #[must_use]
    pub fn for_viewport(width: Option<f64>) -> Self {
        Self {
            expanded: width.is_some_and(|w| w >= LG_BREAKPOINT_PX),
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self { expanded: false }
    }

    /// State after a nav link is followed. Only narrow viewports collapse;
    /// on wide ones the sidebar stays docked.
    #[must_use]
    pub fn after_navigation(self, width: Option<f64>) -> Self {
        if width.is_some_and(|w| w >= LG_BREAKPOINT_PX) {
            self
        } else {
            self.close()
        }
    }

    /// The dimming overlay exists only while the sidebar is open.
    #[must_use]
    pub const fn shows_overlay(self) -> bool {
        self.expanded
    }
}
