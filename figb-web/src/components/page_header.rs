use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(PageHeader)]
pub fn page_header(p: &Props) -> Html {
    html! {
        <div class="page-header">
            <h2 class="page-title">{ p.title.clone() }</h2>
            <p class="page-subtitle">{ p.subtitle.clone() }</p>
        </div>
    }
}
