//! URLs for the static artifacts, honouring the deployment base path.
use figb_stats::Chart;

/// Prefix a site-relative path with `PUBLIC_URL` when it was set at compile
/// time (e.g. `/figb` on GitHub Pages). Without it paths are root-anchored.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

#[must_use]
pub fn chart_src(chart: Chart) -> String {
    asset_path(&chart.relative_path())
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
