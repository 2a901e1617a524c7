use figb_stats::Chart;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::page_header::PageHeader;
use crate::i18n::t;

const FINDINGS: [(Tone, &str); 6] = [
    (Tone::Chart3, "pre_covid"),
    (Tone::Destructive, "drop"),
    (Tone::Chart3, "recovery"),
    (Tone::Primary, "seniors"),
    (Tone::Destructive, "youth"),
    (Tone::Chart2, "structural"),
];

#[function_component(RetentionPage)]
pub fn retention_page() -> Html {
    let findings: Vec<Finding> = FINDINGS
        .iter()
        .map(|(tone, key)| Finding::from_key(*tone, &format!("retention.findings.{key}")))
        .collect();

    html! {
        <div class="page">
            <PageHeader title={t("retention.title")} subtitle={t("retention.subtitle")} />
            <ChartCard
                chart={Chart::RetentionRate}
                title={t("retention.charts.yearly.title")}
                description={t("retention.charts.yearly.desc")}
            />
            <ChartCard
                chart={Chart::RetentionPerEta}
                title={t("retention.charts.by_age.title")}
                description={t("retention.charts.by_age.desc")}
            />
            <FindingsCard
                title={t("retention.findings.title")}
                accent={Tone::Chart3}
                items={findings}
            />
        </div>
    }
}
