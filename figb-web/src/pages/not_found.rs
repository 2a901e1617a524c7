use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::t;
use crate::router::Route;

/// Fallback for any path the router does not know.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="page not-found" aria-live="assertive">
            <h2 class="page-title">{ t("not_found.title") }</h2>
            <p>{ t("not_found.message") }</p>
            <Link<Route> to={Route::Overview} classes="button">
                { t("not_found.back") }
            </Link<Route>>
        </section>
    }
}
