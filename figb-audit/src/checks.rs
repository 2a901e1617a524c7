//! Consumption checks for the offline artifacts.
//!
//! The documents are read through the same loader the dashboard uses, with a
//! filesystem transport standing in for `fetch`, so a document that passes
//! here decodes in the browser as well.

use figb_stats::{
    AdvancedStats, CHARTS_DIR, Chart, LoadError, NumberLocale, RESULTS_DIR, RawResponse, Resource,
    Section, SummaryStats, flat_rows, load_resource, pivot_table,
};
use futures::executor::block_on;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future;
use std::path::{Path, PathBuf};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Gender shares may not add up to exactly 100 because of rounding upstream.
const GENDER_SUM_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: Status,
    pub detail: String,
}

impl CheckResult {
    fn new(name: impl Into<String>, status: Status, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            detail: detail.into(),
        }
    }

    fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Status::Pass, detail)
    }

    fn warn(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Status::Warn, detail)
    }

    fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Status::Fail, detail)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

/// A statistics table as the dashboard would render it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TableDump {
    Flat {
        section: String,
        rows: Vec<TableRow>,
    },
    Pivot {
        section: String,
        years: Vec<String>,
        rows: Vec<(String, Vec<String>)>,
    },
}

#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub results_dir: PathBuf,
    pub charts_dir: PathBuf,
    pub locale: NumberLocale,
    pub tables: bool,
}

impl AuditConfig {
    /// Charts live next to the results directory unless told otherwise.
    #[must_use]
    pub fn default_charts_dir(results_dir: &Path) -> PathBuf {
        results_dir
            .parent()
            .map_or_else(|| PathBuf::from(CHARTS_DIR), |parent| parent.join(CHARTS_DIR))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Audit {
    pub checks: Vec<CheckResult>,
    pub tables: Vec<TableDump>,
}

impl Audit {
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.count(Status::Fail) > 0
    }
}

/// Map a site-relative `results/...` path onto the configured directory.
fn read_document(results_dir: &Path, path: &str) -> Result<RawResponse, LoadError> {
    let relative = path
        .strip_prefix(RESULTS_DIR)
        .map_or(path, |rest| rest.trim_start_matches('/'));
    let file = results_dir.join(relative);
    log::debug!("reading {}", file.display());

    match std::fs::read(&file) {
        Ok(bytes) => String::from_utf8(bytes)
            .map(RawResponse::ok)
            .map_err(|_| LoadError::Utf8),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(RawResponse {
            status: 404,
            status_text: "Not Found".to_string(),
            body: String::new(),
        }),
        Err(err) => Err(LoadError::Request(format!("{}: {err}", file.display()))),
    }
}

/// Load one document from disk through the shared loader.
///
/// # Errors
///
/// Same failures the dashboard would report for the document.
pub fn load_document<T: DeserializeOwned>(
    results_dir: &Path,
    resource: Resource,
) -> Result<T, LoadError> {
    block_on(load_resource(resource, |path| {
        future::ready(read_document(results_dir, &path))
    }))
}

fn check_summary(summary: &SummaryStats) -> Vec<CheckResult> {
    let mut checks = vec![CheckResult::pass(
        "summary: parse",
        format!("period {}", summary.periodo),
    )];

    let percentages = [
        ("percentuale_maschi", summary.percentuale_maschi),
        ("percentuale_femmine", summary.percentuale_femmine),
        ("retention_rate_medio", summary.retention_rate_medio),
    ];
    let out_of_range: Vec<_> = percentages
        .iter()
        .filter(|(_, value)| !(0.0..=100.0).contains(value))
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    checks.push(if out_of_range.is_empty() {
        CheckResult::pass("summary: percentages", "all within 0-100")
    } else {
        CheckResult::fail("summary: percentages", out_of_range.join(", "))
    });

    let gender_sum = summary.percentuale_maschi + summary.percentuale_femmine;
    checks.push(if (gender_sum - 100.0).abs() <= GENDER_SUM_TOLERANCE {
        CheckResult::pass("summary: gender split", format!("sums to {gender_sum}"))
    } else {
        CheckResult::warn("summary: gender split", format!("sums to {gender_sum}"))
    });

    checks
}

fn check_advanced(advanced: &AdvancedStats, locale: NumberLocale) -> Vec<CheckResult> {
    let mut checks = vec![CheckResult::pass(
        "advanced: parse",
        format!("{} metrics", advanced.metric_count()),
    )];

    let missing: Vec<_> = Section::ALL
        .into_iter()
        .filter(|section| !advanced.has_section(*section))
        .map(Section::key)
        .collect();
    checks.push(if missing.is_empty() {
        CheckResult::pass("advanced: sections", "all ten present")
    } else {
        CheckResult::warn(
            "advanced: sections",
            format!("not shown on the dashboard: {}", missing.join(", ")),
        )
    });

    if let Some(per_year) = &advanced.per_anno {
        let gaps = pivot_table(per_year, locale).gap_count();
        checks.push(if gaps == 0 {
            CheckResult::pass(
                "advanced: per-year keys",
                format!("{} years, consistent metrics", per_year.len()),
            )
        } else {
            CheckResult::warn(
                "advanced: per-year keys",
                format!("{gaps} cells shown as gaps"),
            )
        });
    }

    checks
}

fn check_chart(charts_dir: &Path, chart: Chart) -> CheckResult {
    let name = format!("chart: {}", chart.file_name());
    let path = charts_dir.join(chart.file_name());
    match std::fs::read(&path) {
        Ok(bytes) if bytes.starts_with(&PNG_SIGNATURE) => {
            CheckResult::pass(name, format!("{} bytes", bytes.len()))
        }
        Ok(_) => CheckResult::fail(name, "not a PNG image"),
        Err(err) => CheckResult::fail(name, format!("{}: {err}", path.display())),
    }
}

fn dump_tables(advanced: &AdvancedStats, locale: NumberLocale) -> Vec<TableDump> {
    let mut tables = Vec::new();
    for section in Section::ALL {
        if section.is_pivot() {
            if let Some(per_year) = &advanced.per_anno {
                let table = pivot_table(per_year, locale);
                tables.push(TableDump::Pivot {
                    section: section.key().to_string(),
                    rows: table
                        .rows
                        .iter()
                        .map(|row| {
                            (
                                row.label.clone(),
                                row.display_cells().map(str::to_string).collect(),
                            )
                        })
                        .collect(),
                    years: table.years,
                });
            }
        } else if let Some(map) = advanced.flat_section(section) {
            tables.push(TableDump::Flat {
                section: section.key().to_string(),
                rows: flat_rows(map, locale)
                    .into_iter()
                    .map(|row| TableRow {
                        label: row.label,
                        value: row.value,
                    })
                    .collect(),
            });
        }
    }
    tables
}

/// Run every check against the configured directories.
#[must_use]
pub fn run(config: &AuditConfig) -> Audit {
    let mut audit = Audit::default();

    match load_document::<SummaryStats>(&config.results_dir, Resource::Summary) {
        Ok(summary) => audit.checks.extend(check_summary(&summary)),
        Err(err) => audit.checks.push(CheckResult::fail("summary: parse", err.to_string())),
    }

    match load_document::<AdvancedStats>(&config.results_dir, Resource::Advanced) {
        Ok(advanced) => {
            audit.checks.extend(check_advanced(&advanced, config.locale));
            if config.tables {
                audit.tables = dump_tables(&advanced, config.locale);
            }
        }
        Err(err) => audit.checks.push(CheckResult::fail("advanced: parse", err.to_string())),
    }

    for chart in Chart::ALL {
        audit.checks.push(check_chart(&config.charts_dir, chart));
    }

    log::info!(
        "{} checks, {} failed",
        audit.checks.len(),
        audit.count(Status::Fail)
    );
    audit
}
