use figb_stats::Chart;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::page_header::PageHeader;
use crate::i18n::t;

const FINDINGS: [(Tone, &str); 5] = [
    (Tone::Destructive, "ageing"),
    (Tone::Destructive, "youth"),
    (Tone::Primary, "gender"),
    (Tone::Chart3, "activity"),
    (Tone::Chart2, "urgency"),
];

#[function_component(DemografiaPage)]
pub fn demografia_page() -> Html {
    let findings: Vec<Finding> = FINDINGS
        .iter()
        .map(|(tone, key)| Finding::from_key(*tone, &format!("demografia.findings.{key}")))
        .collect();

    html! {
        <div class="page">
            <PageHeader title={t("demografia.title")} subtitle={t("demografia.subtitle")} />
            <ChartCard
                chart={Chart::PiramideEta}
                title={t("demografia.charts.pyramid.title")}
                description={t("demografia.charts.pyramid.desc")}
            />
            <ChartCard
                chart={Chart::GarePerEta}
                title={t("demografia.charts.activity.title")}
                description={t("demografia.charts.activity.desc")}
            />
            <FindingsCard title={t("demografia.findings.title")} items={findings} />
        </div>
    }
}
