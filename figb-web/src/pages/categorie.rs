use figb_stats::Chart;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::info_grid::{InfoGrid, InfoItem};
use crate::components::page_header::PageHeader;
use crate::i18n::t;

/// Tiers of the federation's category system, entry level last to first.
const TIERS: [&str; 6] = ["nc", "fourth", "third", "second", "first", "special"];

const FINDINGS: [(Tone, &str); 4] = [
    (Tone::Primary, "nc"),
    (Tone::Chart2, "third"),
    (Tone::Chart3, "elite"),
    (Tone::Chart4, "stability"),
];

#[function_component(CategoriePage)]
pub fn categorie_page() -> Html {
    let tiers: Vec<InfoItem> = TIERS
        .iter()
        .map(|key| InfoItem::from_key(&format!("categorie.system.{key}")))
        .collect();
    let findings: Vec<Finding> = FINDINGS
        .iter()
        .map(|(tone, key)| Finding::from_key(*tone, &format!("categorie.findings.{key}")))
        .collect();

    html! {
        <div class="page">
            <PageHeader title={t("categorie.title")} subtitle={t("categorie.subtitle")} />
            <ChartCard
                chart={Chart::HeatmapCategorie}
                title={t("categorie.charts.heatmap.title")}
                description={t("categorie.charts.heatmap.desc")}
            />
            <InfoGrid
                title={t("categorie.system.title")}
                heading={Some(AttrValue::from(t("categorie.system.heading")))}
                items={tiers}
                footnote={Some(InfoItem::from_key("categorie.system.note"))}
            />
            <FindingsCard
                title={t("categorie.findings.title")}
                accent={Tone::Chart2}
                items={findings}
            />
        </div>
    }
}
