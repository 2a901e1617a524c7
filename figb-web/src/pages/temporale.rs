use figb_stats::Chart;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::page_header::PageHeader;
use crate::i18n::t;

const FINDINGS: [(Tone, &str); 4] = [
    (Tone::Primary, "peak"),
    (Tone::Destructive, "collapse"),
    (Tone::Chart3, "recovery"),
    (Tone::Chart2, "stability"),
];

#[function_component(TemporalePage)]
pub fn temporale_page() -> Html {
    let findings: Vec<Finding> = FINDINGS
        .iter()
        .map(|(tone, key)| Finding::from_key(*tone, &format!("temporale.findings.{key}")))
        .collect();

    html! {
        <div class="page">
            <PageHeader title={t("temporale.title")} subtitle={t("temporale.subtitle")} />
            <ChartCard
                chart={Chart::TrendTesseramenti}
                title={t("temporale.charts.trend.title")}
                description={t("temporale.charts.trend.desc")}
            />
            <ChartCard
                chart={Chart::TrendRegionale}
                title={t("temporale.charts.regional.title")}
                description={t("temporale.charts.regional.desc")}
            />
            <ChartCard
                chart={Chart::HeatmapCategorie}
                title={t("temporale.charts.categories.title")}
                description={t("temporale.charts.categories.desc")}
            />
            <FindingsCard title={t("temporale.findings.title")} items={findings} />
        </div>
    }
}
