use figb_stats::Chart;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::info_grid::{InfoGrid, InfoItem};
use crate::components::page_header::PageHeader;
use crate::i18n::{fmt_decimal, fmt_integer, t};

const TYPES: [&str; 6] = [
    "sportivo",
    "agonista",
    "scuola",
    "amatoriale",
    "non_agonista",
    "scolastici",
];

const FINDINGS: [(Tone, &str); 5] = [
    (Tone::Primary, "sportivo"),
    (Tone::Chart2, "agonisti"),
    (Tone::Chart3, "scuola"),
    (Tone::Chart4, "amatoriali"),
    (Tone::Chart5, "scolastici"),
];

/// 2024 activity per card type: name, mean competitions, mean points.
const ACTIVITY_2024: [(&str, f64, f64); 8] = [
    ("Agonista", 69.8, 44_419.0),
    ("Non Agonista", 60.7, 21_839.0),
    ("Ordinario Sportivo", 43.7, 7_913.0),
    ("Ordinario Amatoriale", 26.6, 3_247.0),
    ("Scuola Bridge", 21.1, 462.0),
    ("Normale", 12.4, 3_096.0),
    ("Aderente", 6.7, 1_978.0),
    ("Ist. Scolastici", 1.3, 5.0),
];

#[function_component(TesserePage)]
pub fn tessere_page() -> Html {
    let types: Vec<InfoItem> = TYPES
        .iter()
        .map(|key| InfoItem::from_key(&format!("tessere.types.{key}")))
        .collect();
    let findings: Vec<Finding> = FINDINGS
        .iter()
        .map(|(tone, key)| Finding::from_key(*tone, &format!("tessere.findings.{key}")))
        .collect();

    html! {
        <div class="page">
            <PageHeader title={t("tessere.title")} subtitle={t("tessere.subtitle")} />
            <ChartCard
                chart={Chart::TipologieTessera}
                title={t("tessere.charts.distribution.title")}
                description={t("tessere.charts.distribution.desc")}
            />
            <InfoGrid title={t("tessere.types.title")} items={types} />
            <FindingsCard
                title={t("tessere.findings.title")}
                accent={Tone::Chart2}
                items={findings}
            />
            <section class="card stats-card activity-card">
                <header class="card-header">
                    <h3 class="card-title">{ t("tessere.activity.title") }</h3>
                </header>
                <div class="card-content table-wrap">
                    <table class="stats-table">
                        <thead>
                            <tr>
                                <th class="col-metric">{ t("tessere.activity.type") }</th>
                                <th class="col-value">{ t("tessere.activity.competitions") }</th>
                                <th class="col-value">{ t("tessere.activity.points") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for ACTIVITY_2024.iter().map(|(name, competitions, points)| html! {
                                <tr key={*name}>
                                    <td class="metric">{ *name }</td>
                                    <td class="value">{ fmt_decimal(*competitions, 1) }</td>
                                    <td class="value">{ fmt_integer(*points) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}
