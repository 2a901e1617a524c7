use yew::prelude::*;

use crate::components::findings::Tone;

#[derive(Clone, Debug, PartialEq)]
pub struct InfoItem {
    pub label: AttrValue,
    pub text: AttrValue,
}

impl InfoItem {
    #[must_use]
    pub fn from_key(prefix: &str) -> Self {
        Self {
            label: crate::i18n::t(&format!("{prefix}.label")).into(),
            text: crate::i18n::t(&format!("{prefix}.text")).into(),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or(Tone::Primary)]
    pub accent: Tone,
    #[prop_or_default]
    pub heading: Option<AttrValue>,
    pub items: Vec<InfoItem>,
    #[prop_or_default]
    pub footnote: Option<InfoItem>,
}

/// Titled blocks of descriptive text (category system, card types,
/// recommendations).
#[function_component(InfoGrid)]
pub fn info_grid(p: &Props) -> Html {
    html! {
        <section class={classes!("card", "info-card", p.accent.class())}>
            <header class="card-header">
                <h3 class="card-title">{ p.title.clone() }</h3>
            </header>
            <div class="card-content">
                if let Some(heading) = &p.heading {
                    <h4 class="info-heading">{ heading.clone() }</h4>
                }
                <div class="info-grid">
                    { for p.items.iter().map(|item| html! {
                        <div class="info-item">
                            <h4>{ item.label.clone() }</h4>
                            <p>{ item.text.clone() }</p>
                        </div>
                    }) }
                </div>
                if let Some(note) = &p.footnote {
                    <p class="info-note">
                        <strong>{ format!("{}:", note.label) }</strong>
                        { " " }
                        { note.text.clone() }
                    </p>
                }
            </div>
        </section>
    }
}
