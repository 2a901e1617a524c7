use figb_stats::Chart;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::page_header::PageHeader;
use crate::i18n::t;

const FINDINGS: [(Tone, &str); 5] = [
    (Tone::Primary, "lazio"),
    (Tone::Chart2, "north"),
    (Tone::Chart3, "centre"),
    (Tone::Chart4, "south"),
    (Tone::Chart5, "urban"),
];

#[function_component(RegionalePage)]
pub fn regionale_page() -> Html {
    let findings: Vec<Finding> = FINDINGS
        .iter()
        .map(|(tone, key)| Finding::from_key(*tone, &format!("regionale.findings.{key}")))
        .collect();

    html! {
        <div class="page">
            <PageHeader title={t("regionale.title")} subtitle={t("regionale.subtitle")} />
            <ChartCard
                chart={Chart::DistribuzioneRegionale}
                title={t("regionale.charts.ranking.title")}
                description={t("regionale.charts.ranking.desc")}
            />
            <ChartCard
                chart={Chart::TrendRegionale}
                title={t("regionale.charts.trend.title")}
                description={t("regionale.charts.trend.desc")}
            />
            <FindingsCard title={t("regionale.findings.title")} items={findings} />
        </div>
    }
}
