mod checks;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use figb_stats::NumberLocale;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use checks::{Audit, AuditConfig};
use report::ReportMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Coloured summary for a terminal
    Console,
    /// Machine-readable report
    Json,
    /// Tables suitable for a README or a PR comment
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    It,
    En,
}

impl Lang {
    const fn locale(self) -> NumberLocale {
        match self {
            Self::It => NumberLocale::IT,
            Self::En => NumberLocale::EN,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "figb-audit", version)]
#[command(about = "Check the JSON documents and chart images the FIGB dashboard consumes")]
struct Args {
    /// Directory holding summary_stats.json and statistiche_avanzate.json
    #[arg(long, default_value = "figb-web/static/results")]
    results_dir: PathBuf,

    /// Directory holding the chart PNGs (defaults to `charts` next to the results)
    #[arg(long)]
    charts_dir: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Include the statistics tables exactly as the dashboard renders them
    #[arg(long)]
    tables: bool,

    /// Number formatting for the tables
    #[arg(long, value_enum, default_value_t = Lang::It)]
    lang: Lang,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args);
    if args.report == ReportFormat::Console && args.output.is_none() {
        announce_banner();
    }

    let audit = checks::run(&config);
    write_report(&args, &config, &audit)?;

    if audit.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}

fn announce_banner() {
    println!("{}", "🃏 FIGB Artifact Audit".bright_cyan().bold());
    println!("{}", "======================".cyan());
}

fn build_config(args: &Args) -> AuditConfig {
    let charts_dir = args
        .charts_dir
        .clone()
        .unwrap_or_else(|| AuditConfig::default_charts_dir(&args.results_dir));
    AuditConfig {
        results_dir: args.results_dir.clone(),
        charts_dir,
        locale: args.lang.locale(),
        tables: args.tables,
    }
}

fn write_report(args: &Args, config: &AuditConfig, audit: &Audit) -> Result<()> {
    let meta = ReportMeta {
        generated_at: chrono::Utc::now().to_rfc3339(),
        results_dir: config.results_dir.display().to_string(),
        charts_dir: config.charts_dir.display().to_string(),
    };
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Json => report::generate_json_report(&mut output_target, audit, &meta)?,
        ReportFormat::Markdown => {
            report::generate_markdown_report(&mut output_target, audit, &meta)?;
        }
        ReportFormat::Console => {
            report::generate_console_report(&mut output_target, audit, &meta, args.verbose)?;
        }
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
