use figb_stats::format::plain_number;
use figb_stats::{Chart, FetchState, Resource, SummaryStats};
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::findings::{Finding, FindingsCard, Tone};
use crate::components::kpi::KpiCard;
use crate::components::page_header::PageHeader;
use crate::components::status::{StatusKind, StatusMessage};
use crate::data::use_resource;
use crate::i18n::{fmt_decimal, fmt_integer, fmt_pct_plain, t, tr};

#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let state = use_resource::<SummaryStats>(Resource::Summary);
    html! { <OverviewView {state} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ViewProps {
    pub state: FetchState<SummaryStats>,
}

/// Renders whatever the summary fetch has produced so far.
#[function_component(OverviewView)]
pub fn overview_view(p: &ViewProps) -> Html {
    match &p.state {
        FetchState::Loading => html! {
            <StatusMessage kind={StatusKind::Loading} message={t("status.loading_summary")} />
        },
        FetchState::Failed(_) => html! {
            <StatusMessage kind={StatusKind::Error} message={t("status.error_summary")} />
        },
        FetchState::Loaded(stats) => render_summary(stats),
    }
}

fn interpolate(key: &str, pairs: &[(&str, &str)]) -> String {
    let args: BTreeMap<&str, &str> = pairs.iter().copied().collect();
    tr(key, Some(&args))
}

fn render_summary(stats: &SummaryStats) -> Html {
    let age = plain_number(stats.eta_media);
    let median = plain_number(stats.eta_mediana);
    let retention = plain_number(stats.retention_rate_medio);
    let male = plain_number(stats.percentuale_maschi);
    let female = plain_number(stats.percentuale_femmine);
    let (male_width, female_width) = stats.gender_split();

    let insights = vec![
        Finding::from_key(Tone::Primary, "overview.insights.decline"),
        Finding {
            tone: Tone::Chart3,
            label: t("overview.insights.retention.label").into(),
            text: interpolate("overview.insights.retention.text", &[("value", &retention)]).into(),
        },
        Finding {
            tone: Tone::Chart2,
            label: t("overview.insights.age.label").into(),
            text: interpolate("overview.insights.age.text", &[("value", &age)]).into(),
        },
        Finding {
            tone: Tone::Chart4,
            label: t("overview.insights.gender.label").into(),
            text: interpolate(
                "overview.insights.gender.text",
                &[("male", &male), ("female", &female)],
            )
            .into(),
        },
    ];

    html! {
        <div class="page">
            <PageHeader title={t("overview.title")} subtitle={t("overview.subtitle")} />

            <div class="kpi-grid">
                <KpiCard
                    title={t("overview.kpi.players.title")}
                    value={fmt_integer(stats.giocatori_unici)}
                    description={t("overview.kpi.players.desc")}
                    icon="👥"
                />
                <KpiCard
                    title={t("overview.kpi.clubs.title")}
                    value={fmt_integer(stats.circoli_unici)}
                    description={t("overview.kpi.clubs.desc")}
                    icon="🏛"
                />
                <KpiCard
                    title={t("overview.kpi.retention.title")}
                    value={fmt_pct_plain(stats.retention_rate_medio)}
                    description={t("overview.kpi.retention.desc")}
                    icon="↻"
                    trend={Some(stats.retention_trend())}
                />
                <KpiCard
                    title={t("overview.kpi.age.title")}
                    value={interpolate("overview.kpi.age.value", &[("value", &age)])}
                    description={interpolate("overview.kpi.age.desc", &[("value", &median)])}
                    icon="⌛"
                />
                <KpiCard
                    title={t("overview.kpi.competitions.title")}
                    value={fmt_decimal(stats.gare_media, 3)}
                    description={t("overview.kpi.competitions.desc")}
                    icon="🏆"
                />
                <KpiCard
                    title={t("overview.kpi.points.title")}
                    value={fmt_integer(stats.punti_medi)}
                    description={t("overview.kpi.points.desc")}
                    icon="★"
                />
            </div>

            <section class="card gender-card">
                <header class="card-header">
                    <h3 class="card-title">{ t("overview.gender.title") }</h3>
                    <p class="card-description">{ t("overview.gender.desc") }</p>
                </header>
                <div class="card-content">
                    <div class="gender-row">
                        <span class="gender-label">{ t("overview.gender.male") }</span>
                        <span class="gender-value">{ format!("{male}%") }</span>
                    </div>
                    <div class="bar-track">
                        <div class="bar-fill bar-male" style={format!("width: {male_width}%")}></div>
                    </div>
                    <div class="gender-row">
                        <span class="gender-label">{ t("overview.gender.female") }</span>
                        <span class="gender-value">{ format!("{female}%") }</span>
                    </div>
                    <div class="bar-track">
                        <div class="bar-fill bar-female" style={format!("width: {female_width}%")}></div>
                    </div>
                </div>
            </section>

            <div class="chart-grid">
                <ChartCard
                    chart={Chart::TrendTesseramenti}
                    title={t("overview.charts.trend.title")}
                    description={t("overview.charts.trend.desc")}
                />
                <ChartCard
                    chart={Chart::DistribuzioneRegionale}
                    title={t("overview.charts.regional.title")}
                    description={t("overview.charts.regional.desc")}
                />
            </div>

            <FindingsCard title={t("overview.insights.title")} items={insights} />
        </div>
    }
}
