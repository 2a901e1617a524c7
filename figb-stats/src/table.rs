//! Row models for the statistics tables.
//!
//! Both builders are pure: they take a parsed section and return formatted
//! strings ready for any renderer (the Yew components and the audit CLI).

use crate::advanced::{MetricMap, YearlyStats};
use crate::format::{NumberLocale, format_key, format_value};

/// Shown in a pivot cell when a year has no value for the metric.
pub const GAP_MARKER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub key: String,
    pub label: String,
    /// One entry per year column; `None` where the year lacks the metric.
    pub cells: Vec<Option<String>>,
}

impl PivotRow {
    /// Cells with gaps replaced by [`GAP_MARKER`].
    pub fn display_cells(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(GAP_MARKER))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PivotTable {
    pub years: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells that had to be filled with the gap marker.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_none())
            .count()
    }
}

fn is_metadata(key: &str) -> bool {
    key.starts_with('_')
}

/// Two-column rows for a flat section, in document order, metadata keys dropped.
#[must_use]
pub fn flat_rows(section: &MetricMap, locale: NumberLocale) -> Vec<MetricRow> {
    section
        .iter()
        .filter(|(key, _)| !is_metadata(key))
        .map(|(key, value)| MetricRow {
            key: key.clone(),
            label: format_key(key),
            value: format_value(value, locale),
        })
        .collect()
}

/// Metric × year table for the per-year section.
///
/// Columns are the years in lexicographic order. Rows are the union of every
/// year's metric keys: the first year's keys in its order, then keys first
/// seen in later years in the order they appear.
#[must_use]
pub fn pivot_table(per_year: &YearlyStats, locale: NumberLocale) -> PivotTable {
    let years: Vec<String> = per_year.keys().cloned().collect();

    let mut metrics: Vec<&str> = Vec::new();
    for year_metrics in per_year.values() {
        for key in year_metrics.keys() {
            if !is_metadata(key) && !metrics.contains(&key.as_str()) {
                metrics.push(key);
            }
        }
    }

    let rows = metrics
        .into_iter()
        .map(|metric| PivotRow {
            key: metric.to_string(),
            label: format_key(metric),
            cells: per_year
                .values()
                .map(|year_metrics| {
                    year_metrics
                        .get(metric)
                        .map(|value| format_value(value, locale))
                })
                .collect(),
        })
        .collect();

    PivotTable { years, rows }
}
