use yew::prelude::*;

/// Accent colour of a finding bullet or card border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Chart2,
    Chart3,
    Chart4,
    Chart5,
    Destructive,
}

impl Tone {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "tone-primary",
            Self::Chart2 => "tone-chart-2",
            Self::Chart3 => "tone-chart-3",
            Self::Chart4 => "tone-chart-4",
            Self::Chart5 => "tone-chart-5",
            Self::Destructive => "tone-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Finding {
    pub tone: Tone,
    pub label: AttrValue,
    pub text: AttrValue,
}

impl Finding {
    /// Build from a translation prefix holding `label` and `text`.
    #[must_use]
    pub fn from_key(tone: Tone, prefix: &str) -> Self {
        Self {
            tone,
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
    pub items: Vec<Finding>,
}

/// Bulleted commentary card closing most pages.
#[function_component(FindingsCard)]
pub fn findings_card(p: &Props) -> Html {
    html! {
        <section class={classes!("card", "findings-card", p.accent.class())}>
            <header class="card-header">
                <h3 class="card-title">{ p.title.clone() }</h3>
            </header>
            <ul class="card-content findings">
                { for p.items.iter().map(|item| html! {
                    <li class="finding">
                        <span class={classes!("bullet", item.tone.class())} aria-hidden="true"></span>
                        <p>
                            <strong>{ format!("{}:", item.label) }</strong>
                            { " " }
                            { item.text.clone() }
                        </p>
                    </li>
                }) }
            </ul>
        </section>
    }
}
