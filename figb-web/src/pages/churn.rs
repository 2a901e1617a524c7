use figb_stats::Chart;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::info_grid::{InfoGrid, InfoItem};
use crate::components::page_header::PageHeader;
use crate::i18n::t;

const FINDINGS: [(Tone, &str); 6] = [
    (Tone::Destructive, "peak"),
    (Tone::Chart4, "seniors"),
    (Tone::Chart2, "youth"),
    (Tone::Primary, "card_types"),
    (Tone::Chart3, "competitive"),
    (Tone::Chart5, "natural"),
];

const RECOMMENDATIONS: [&str; 4] = ["youth", "schools", "digital", "predictive"];

#[function_component(ChurnPage)]
pub fn churn_page() -> Html {
    let findings: Vec<Finding> = FINDINGS
        .iter()
        .map(|(tone, key)| Finding::from_key(*tone, &format!("churn.findings.{key}")))
        .collect();
    let recommendations: Vec<InfoItem> = RECOMMENDATIONS
        .iter()
        .map(|key| InfoItem::from_key(&format!("churn.recommendations.{key}")))
        .collect();

    html! {
        <div class="page">
            <PageHeader title={t("churn.title")} subtitle={t("churn.subtitle")} />
            <ChartCard
                chart={Chart::ChurnPerEta}
                title={t("churn.charts.by_age.title")}
                description={t("churn.charts.by_age.desc")}
            />
            <FindingsCard
                title={t("churn.findings.title")}
                accent={Tone::Destructive}
                items={findings}
            />
            <InfoGrid title={t("churn.recommendations.title")} items={recommendations} />
        </div>
    }
}
