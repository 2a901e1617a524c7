use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: StatusKind,
    pub message: AttrValue,
}

/// Full-height placeholder shown while a document loads or after it failed.
#[function_component(StatusMessage)]
pub fn status_message(p: &Props) -> Html {
    let (class, role) = match p.kind {
        StatusKind::Loading => ("status status-loading", "status"),
        StatusKind::Error => ("status status-error", "alert"),
    };
    html! {
        <div class={class} role={role} aria-live="polite">
            { p.message.clone() }
        </div>
    }
}
