use figb_stats::Trend;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub value: AttrValue,
    pub description: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub trend: Option<Trend>,
}

#[function_component(KpiCard)]
pub fn kpi_card(p: &Props) -> Html {
    let trend = p.trend.map(|trend| match trend {
        Trend::Positive => html! {
            <span class="trend trend-positive">{ "▲ " }{ t("overview.trend.positive") }</span>
        },
        Trend::Attention => html! {
            <span class="trend trend-attention">{ "▼ " }{ t("overview.trend.attention") }</span>
        },
    });

    html! {
        <section class="card kpi-card">
            <header class="kpi-header">
                <h3 class="kpi-title">{ p.title.clone() }</h3>
                <span class="kpi-icon" aria-hidden="true">{ p.icon.clone() }</span>
            </header>
            <div class="kpi-value">{ p.value.clone() }</div>
            <p class="kpi-description">{ p.description.clone() }</p>
            { for trend }
        </section>
    }
}
