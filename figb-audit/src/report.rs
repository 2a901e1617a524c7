use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::checks::{Audit, CheckResult, Status, TableDump};

/// Everything a report needs besides the checks themselves.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub results_dir: String,
    pub charts_dir: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    meta: &'a ReportMeta,
    passed: usize,
    warnings: usize,
    failed: usize,
    checks: &'a [CheckResult],
    #[serde(skip_serializing_if = "no_tables")]
    tables: &'a [TableDump],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_tables(tables: &&[TableDump]) -> bool {
    tables.is_empty()
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    audit: &Audit,
    meta: &ReportMeta,
    verbose: bool,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Artifact Audit Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())?;
    writeln!(out, "Results: {}", meta.results_dir)?;
    writeln!(out, "Charts:  {}", meta.charts_dir)?;
    writeln!(out, "Passed: {}", audit.count(Status::Pass).to_string().green())?;
    writeln!(out, "Warnings: {}", audit.count(Status::Warn).to_string().yellow())?;
    writeln!(out, "Failed: {}", audit.count(Status::Fail).to_string().red())?;
    writeln!(out)?;

    for check in &audit.checks {
        let status = match check.status {
            Status::Pass => "✅ PASS".green(),
            Status::Warn => "⚠️  WARN".yellow(),
            Status::Fail => "❌ FAIL".red(),
        };
        writeln!(out, "{status} {}", check.name.bold())?;
        if verbose || check.status != Status::Pass {
            writeln!(out, "     • {}", check.detail)?;
        }
    }

    for table in &audit.tables {
        writeln!(out)?;
        match table {
            TableDump::Flat { section, rows } => {
                writeln!(out, "{}", section.bright_yellow().bold())?;
                let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
                for row in rows {
                    writeln!(out, "  {:<width$}  {:>14}", row.label, row.value)?;
                }
            }
            TableDump::Pivot {
                section,
                years,
                rows,
            } => {
                writeln!(out, "{}", section.bright_yellow().bold())?;
                let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
                write!(out, "  {:<width$}", "")?;
                for year in years {
                    write!(out, "  {year:>10}")?;
                }
                writeln!(out)?;
                for (label, cells) in rows {
                    write!(out, "  {label:<width$}")?;
                    for cell in cells {
                        write!(out, "  {cell:>10}")?;
                    }
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    out: &mut W,
    audit: &Audit,
    meta: &ReportMeta,
) -> Result<()> {
    let report = JsonReport {
        meta,
        passed: audit.count(Status::Pass),
        warnings: audit.count(Status::Warn),
        failed: audit.count(Status::Fail),
        checks: &audit.checks,
        tables: &audit.tables,
    };
    let json_output = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    audit: &Audit,
    meta: &ReportMeta,
) -> Result<()> {
    writeln!(out, "# FIGB Artifact Audit\n")?;
    writeln!(out, "_Generated {}_\n", meta.generated_at)?;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Results**: `{}`", meta.results_dir)?;
    writeln!(out, "- **Charts**: `{}`", meta.charts_dir)?;
    writeln!(out, "- **Passed**: {}", audit.count(Status::Pass))?;
    writeln!(out, "- **Warnings**: {}", audit.count(Status::Warn))?;
    writeln!(out, "- **Failed**: {}\n", audit.count(Status::Fail))?;

    writeln!(out, "## Checks\n")?;
    writeln!(out, "| Status | Check | Detail |")?;
    writeln!(out, "|---|---|---|")?;
    for check in &audit.checks {
        let status = match check.status {
            Status::Pass => "✅",
            Status::Warn => "⚠️",
            Status::Fail => "❌",
        };
        writeln!(
            out,
            "| {status} | {} | {} |",
            escape_cell(&check.name),
            escape_cell(&check.detail)
        )?;
    }

    for table in &audit.tables {
        writeln!(out)?;
        match table {
            TableDump::Flat { section, rows } => {
                writeln!(out, "### {section}\n")?;
                writeln!(out, "| Metric | Value |")?;
                writeln!(out, "|---|---:|")?;
                for row in rows {
                    writeln!(
                        out,
                        "| {} | {} |",
                        escape_cell(&row.label),
                        escape_cell(&row.value)
                    )?;
                }
            }
            TableDump::Pivot {
                section,
                years,
                rows,
            } => {
                writeln!(out, "### {section}\n")?;
                writeln!(out, "| Metric | {} |", years.join(" | "))?;
                writeln!(out, "|---|{}", "---:|".repeat(years.len()))?;
                for (label, cells) in rows {
                    let cells: Vec<_> = cells.iter().map(|c| escape_cell(c)).collect();
                    writeln!(out, "| {} | {} |", escape_cell(label), cells.join(" | "))?;
                }
            }
        }
    }
    Ok(())
}
