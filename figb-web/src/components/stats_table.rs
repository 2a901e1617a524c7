//! Yew renderings of the flat and pivot tables built by `figb-stats`.
use figb_stats::{MetricRow, PivotTable};
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct FlatProps {
    pub title: AttrValue,
    pub rows: Vec<MetricRow>,
}

/// Two-column metric/value table with a metric count in the header.
#[function_component(FlatStatsTable)]
pub fn flat_stats_table(p: &FlatProps) -> Html {
    let count = p.rows.len().to_string();
    let available = tr(
        "statistiche.tables.available",
        Some(&BTreeMap::from([("count", count.as_str())])),
    );

    html! {
        <section class="card stats-card">
            <header class="card-header">
                <h3 class="card-title">{ p.title.clone() }</h3>
                <p class="card-description">{ available }</p>
            </header>
            <div class="card-content table-wrap">
                <table class="stats-table">
                    <thead>
                        <tr>
                            <th class="col-metric">{ t("statistiche.tables.metric") }</th>
                            <th class="col-value">{ t("statistiche.tables.value") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for p.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()}>
                                <td class="metric">{ row.label.clone() }</td>
                                <td class="value">{ row.value.clone() }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PivotProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub table: PivotTable,
}

/// Metric × year table; gaps show the marker carried by each row.
#[function_component(PivotStatsTable)]
pub fn pivot_stats_table(p: &PivotProps) -> Html {
    html! {
        <section class="card stats-card">
            <header class="card-header">
                <h3 class="card-title">{ p.title.clone() }</h3>
                <p class="card-description">{ p.description.clone() }</p>
            </header>
            <div class="card-content table-wrap scroll-x">
                <table class="stats-table pivot">
                    <thead>
                        <tr>
                            <th class="col-metric sticky">{ t("statistiche.tables.metric") }</th>
                            { for p.table.years.iter().map(|year| html! {
                                <th class="col-value" key={year.clone()}>{ year.clone() }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for p.table.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()}>
                                <td class="metric sticky">{ row.label.clone() }</td>
                                { for row.cells.iter().zip(row.display_cells()).map(|(cell, shown)| html! {
                                    <td class={classes!("value", cell.is_none().then_some("gap"))}>
                                        { shown.to_string() }
                                    </td>
                                }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </section>
    }
}
