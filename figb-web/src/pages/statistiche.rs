use figb_stats::{AdvancedStats, FetchState, GAP_MARKER, Resource, Section, flat_rows, pivot_table};
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::components::info_grid::{InfoGrid, InfoItem};
use crate::components::page_header::PageHeader;
use crate::components::stats_table::{FlatStatsTable, PivotStatsTable};
use crate::components::status::{StatusKind, StatusMessage};
use crate::components::tabs::{TabBar, TabItem};
use crate::data::use_resource;
use crate::i18n::{fmt_integer, fmt_value, number_locale, t, tr};

const NOTES: [&str; 4] = ["source", "techniques", "software", "validation"];
const RECORDS_KEY: &str = "02_totale_record";

#[function_component(StatistichePage)]
pub fn statistiche_page() -> Html {
    let state = use_resource::<AdvancedStats>(Resource::Advanced);
    html! { <StatisticheView {state} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ViewProps {
    pub state: FetchState<AdvancedStats>,
    /// Tab selected on first render.
    #[prop_or(AttrValue::Static("generale"))]
    pub initial_tab: AttrValue,
}

#[function_component(StatisticheView)]
pub fn statistiche_view(p: &ViewProps) -> Html {
    let active = use_state({
        let initial = p.initial_tab.clone();
        move || initial
    });
    let on_select = {
        let active = active.clone();
        Callback::from(move |id: AttrValue| active.set(id))
    };

    match &p.state {
        FetchState::Loading => html! {
            <StatusMessage kind={StatusKind::Loading} message={t("status.loading_advanced")} />
        },
        FetchState::Failed(_) => html! {
            <StatusMessage kind={StatusKind::Error} message={t("status.error_advanced")} />
        },
        FetchState::Loaded(stats) => {
            let section = Section::from_key(active.as_str()).unwrap_or(Section::Generale);
            let tabs: Vec<TabItem> = Section::ALL
                .iter()
                .map(|section| TabItem {
                    id: section.key().into(),
                    label: t(&format!("statistiche.tabs.{}", section.key())).into(),
                })
                .collect();
            let notes: Vec<InfoItem> = NOTES
                .iter()
                .map(|key| InfoItem::from_key(&format!("statistiche.notes.{key}")))
                .collect();

            html! {
                <div class="page">
                    <PageHeader title={t("statistiche.title")} subtitle={t("statistiche.subtitle")} />
                    { overview_tiles(stats) }
                    <TabBar
                        label={t("statistiche.tabs.label")}
                        items={tabs}
                        active={AttrValue::from(section.key())}
                        on_select={on_select}
                    />
                    <div
                        class="tab-panel"
                        role="tabpanel"
                        aria-labelledby={format!("tab-{}", section.key())}
                    >
                        { section_panel(stats, section) }
                    </div>
                    <InfoGrid title={t("statistiche.notes.title")} items={notes} />
                </div>
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn overview_tiles(stats: &AdvancedStats) -> Html {
    let present = Section::ALL
        .into_iter()
        .filter(|section| stats.has_section(*section))
        .count();
    let records = stats
        .generale
        .as_ref()
        .and_then(|generale| generale.get(RECORDS_KEY))
        .map_or_else(|| GAP_MARKER.to_string(), fmt_value);

    let tiles = [
        ("metrics", fmt_integer(stats.metric_count() as f64)),
        ("sections", present.to_string()),
        ("years", stats.year_count().to_string()),
        ("records", records),
    ];

    html! {
        <section class="card overview-card">
            <header class="card-header">
                <h3 class="card-title">{ t("statistiche.overview.title") }</h3>
            </header>
            <div class="card-content tile-grid">
                { for tiles.into_iter().map(|(key, value)| html! {
                    <div class="tile" key={key}>
                        <div class="tile-value">{ value }</div>
                        <div class="tile-label">{ t(&format!("statistiche.overview.{key}")) }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

/// Table for one tab; a section missing from the document renders nothing.
fn section_panel(stats: &AdvancedStats, section: Section) -> Html {
    let locale = number_locale();
    if section.is_pivot() {
        let Some(per_year) = stats.per_anno.as_ref() else {
            return Html::default();
        };
        let table = pivot_table(per_year, locale);
        let first = table.years.first().cloned().unwrap_or_default();
        let last = table.years.last().cloned().unwrap_or_default();
        let description = tr(
            "statistiche.yearly.desc",
            Some(&BTreeMap::from([("first", first.as_str()), ("last", last.as_str())])),
        );
        return html! {
            <PivotStatsTable
                title={t("statistiche.yearly.title")}
                description={description}
                table={table}
            />
        };
    }

    stats.flat_section(section).map_or_else(Html::default, |map| {
        html! {
            <FlatStatsTable
                title={t(&format!("statistiche.tables.{}", section.key()))}
                rows={flat_rows(map, locale)}
            />
        }
    })
}
