use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    categorie::CategoriePage, churn::ChurnPage, demografia::DemografiaPage,
    not_found::NotFound, overview::OverviewPage, regionale::RegionalePage,
    retention::RetentionPage, statistiche::StatistichePage, temporale::TemporalePage,
    tessere::TesserePage,
};

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq, Hash)]
pub enum Route {
    #[at("/")]
    Overview,
    #[at("/temporale")]
    Temporale,
    #[at("/regionale")]
    Regionale,
    #[at("/demografia")]
    Demografia,
    #[at("/categorie")]
    Categorie,
    #[at("/retention")]
    Retention,
    #[at("/churn")]
    Churn,
    #[at("/tessere")]
    Tessere,
    #[at("/statistiche")]
    Statistiche,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Sidebar entries, top to bottom.
    pub const NAV: [Self; 9] = [
        Self::Overview,
        Self::Temporale,
        Self::Regionale,
        Self::Demografia,
        Self::Categorie,
        Self::Retention,
        Self::Churn,
        Self::Tessere,
        Self::Statistiche,
    ];

    /// Translation key of the sidebar label. `None` for the fallback page.
    #[must_use]
    pub const fn nav_key(self) -> Option<&'static str> {
        match self {
            Self::Overview => Some("nav.overview"),
            Self::Temporale => Some("nav.temporale"),
            Self::Regionale => Some("nav.regionale"),
            Self::Demografia => Some("nav.demografia"),
            Self::Categorie => Some("nav.categorie"),
            Self::Retention => Some("nav.retention"),
            Self::Churn => Some("nav.churn"),
            Self::Tessere => Some("nav.tessere"),
            Self::Statistiche => Some("nav.statistiche"),
            Self::NotFound => None,
        }
    }

    /// Glyph shown next to the sidebar label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Overview => "▦",
            Self::Temporale => "↗",
            Self::Regionale => "⌖",
            Self::Demografia => "☺",
            Self::Categorie => "★",
            Self::Retention => "↻",
            Self::Churn => "↘",
            Self::Tessere => "▤",
            Self::Statistiche => "▥",
            Self::NotFound => "?",
        }
    }
}

#[allow(clippy::needless_pass_by_value)] // `Switch` hands routes over by value.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Overview => html! { <OverviewPage /> },
        Route::Temporale => html! { <TemporalePage /> },
        Route::Regionale => html! { <RegionalePage /> },
        Route::Demografia => html! { <DemografiaPage /> },
        Route::Categorie => html! { <CategoriePage /> },
        Route::Retention => html! { <RetentionPage /> },
        Route::Churn => html! { <ChurnPage /> },
        Route::Tessere => html! { <TesserePage /> },
        Route::Statistiche => html! { <StatistichePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
