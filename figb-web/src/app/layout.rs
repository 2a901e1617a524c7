use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::sidebar::SidebarState;
use crate::components::{header::Header, nav::SideNav};
use crate::i18n;
use crate::router::{Route, switch};

fn viewport() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::viewport_width()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn initial_sidebar() -> SidebarState {
    SidebarState::for_viewport(viewport())
}

/// Header, sidebar and routed content. Must sit inside a router.
#[function_component(Layout)]
pub fn layout() -> Html {
    let sidebar = use_state(initial_sidebar);
    let lang = use_state(i18n::current_lang);
    let active = use_route::<Route>();

    let on_toggle = {
        let sidebar = sidebar.clone();
        Callback::from(move |()| sidebar.set(sidebar.toggle()))
    };
    let on_navigate = {
        let sidebar = sidebar.clone();
        Callback::from(move |()| sidebar.set(sidebar.after_navigation(viewport())))
    };
    let on_overlay = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| sidebar.set(sidebar.close()))
    };
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| lang.set(code))
    };

    html! {
        <div class="dashboard">
            <Header
                expanded={sidebar.expanded}
                on_toggle={on_toggle}
                current_lang={(*lang).clone()}
                on_lang_change={on_lang_change}
            />
            <div class="dashboard-body">
                <SideNav expanded={sidebar.expanded} active={active} on_navigate={on_navigate} />
                if sidebar.shows_overlay() {
                    <div class="sidebar-overlay" aria-hidden="true" onclick={on_overlay}></div>
                }
                // Keyed on the language so page text is rebuilt after a switch.
                <main id="main" role="main" class="dashboard-main" key={(*lang).clone()}>
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </div>
    }
}
