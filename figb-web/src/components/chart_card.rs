use figb_stats::Chart;
use yew::prelude::*;

use crate::i18n::t;
use crate::paths::chart_src;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub chart: Chart,
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Card around one of the pre-rendered chart images.
#[function_component(ChartCard)]
pub fn chart_card(p: &Props) -> Html {
    html! {
        <section class="card chart-card">
            <header class="card-header">
                <h3 class="card-title">{ p.title.clone() }</h3>
                <p class="card-description">{ p.description.clone() }</p>
            </header>
            <div class="card-content">
                <img
                    src={chart_src(p.chart)}
                    alt={t(&p.chart.i18n_key())}
                    class="chart-image"
                    loading="lazy"
                />
            </div>
        </section>
    }
}
