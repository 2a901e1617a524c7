use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::t;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub expanded: bool,
    pub active: Option<Route>,
    /// Fired when any link is activated; the layout may collapse the sidebar.
    pub on_navigate: Callback<()>,
}

#[function_component(SideNav)]
pub fn side_nav(p: &Props) -> Html {
    let on_click = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <aside id="sidebar" class={classes!("sidebar", p.expanded.then_some("open"))}>
            <nav aria-label={t("nav.label")}>
                <ul class="nav-list">
                    { for Route::NAV.into_iter().map(|route| {
                        let is_active = p.active == Some(route);
                        let label = route.nav_key().map(t).unwrap_or_default();
                        html! {
                            <li
                                class={classes!("nav-item", is_active.then_some("active"))}
                                aria-current={is_active.then_some("page")}
                                onclick={on_click.clone()}
                            >
                                <Link<Route> to={route} classes="nav-link">
                                    <span class="nav-icon" aria-hidden="true">{ route.icon() }</span>
                                    { label }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </aside>
    }
}
