use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub id: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub items: Vec<TabItem>,
    pub active: AttrValue,
    pub on_select: Callback<AttrValue>,
}

#[function_component(TabBar)]
pub fn tab_bar(p: &Props) -> Html {
    html! {
        <div class="tab-list" role="tablist" aria-label={p.label.clone()}>
            { for p.items.iter().map(|item| {
                let selected = item.id == p.active;
                let onclick = {
                    let cb = p.on_select.clone();
                    let id = item.id.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                };
                html! {
                    <button
                        type="button"
                        role="tab"
                        id={format!("tab-{}", item.id)}
                        class={classes!("tab", selected.then_some("active"))}
                        aria-selected={selected.to_string()}
                        {onclick}
                    >
                        { item.label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
