use yew::prelude::*;
use yew_router::prelude::*;

pub mod layout;
pub mod sidebar;

pub use layout::Layout;
pub use sidebar::SidebarState;

/// Root component: the browser router around the dashboard shell.
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Layout />
        </BrowserRouter>
    }
}
