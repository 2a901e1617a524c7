use figb_stats::{Chart, MetricRow, NumberLocale, PivotRow, PivotTable, Trend};
use figb_web::components::chart_card::{ChartCard, Props as ChartCardProps};
use figb_web::components::findings::{Finding, FindingsCard, Props as FindingsProps, Tone};
use figb_web::components::kpi::{KpiCard, Props as KpiProps};
use figb_web::components::stats_table::{FlatProps, FlatStatsTable, PivotProps, PivotStatsTable};
use figb_web::components::tabs::{Props as TabProps, TabBar, TabItem};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

#[test]
fn kpi_card_shows_trend_badge_only_when_given() {
    figb_web::i18n::set_lang("it");
    let props = KpiProps {
        title: "Retention Rate Medio".into(),
        value: "82.5%".into(),
        description: "Tasso di ritesseramento".into(),
        icon: "↻".into(),
        trend: Some(Trend::Positive),
    };
    let html = block_on(LocalServerRenderer::<KpiCard>::with_props(props.clone()).render());
    assert!(html.contains("trend-positive"));
    assert!(html.contains("▲"));

    let plain = KpiProps { trend: None, ..props };
    let html = block_on(LocalServerRenderer::<KpiCard>::with_props(plain).render());
    assert!(!html.contains("trend-"));
}

#[test]
fn findings_card_applies_tones() {
    let props = FindingsProps {
        title: "Key Findings".into(),
        accent: Tone::Destructive,
        items: vec![
            Finding {
                tone: Tone::Chart3,
                label: "Picco".into(),
                text: "Massimo nel 2019".into(),
            },
            Finding {
                tone: Tone::Primary,
                label: "Calo".into(),
                text: "Crollo nel 2020".into(),
            },
        ],
    };
    let html = block_on(LocalServerRenderer::<FindingsCard>::with_props(props).render());
    assert!(html.contains("tone-destructive"));
    assert!(html.contains("bullet tone-chart-3"));
    assert!(html.contains("<strong>Picco:</strong>"));
    assert_eq!(html.matches("class=\"finding\"").count(), 2);
}

#[test]
fn chart_card_points_at_chart_asset() {
    figb_web::i18n::set_lang("it");
    let props = ChartCardProps {
        chart: Chart::RetentionRate,
        title: "Retention".into(),
        description: "Per anno".into(),
    };
    let html = block_on(LocalServerRenderer::<ChartCard>::with_props(props).render());
    assert!(html.contains("src=\"/charts/04_retention_rate.png\""));
    assert!(html.contains("loading=\"lazy\""));
}

#[test]
fn flat_table_counts_rows() {
    figb_web::i18n::set_lang("it");
    let section = serde_json::json!({"eta_media": 68.42, "totale_maschi": 41230, "_nota": "x"});
    let rows = figb_stats::flat_rows(section.as_object().unwrap(), NumberLocale::IT);
    let props = FlatProps {
        title: "Statistiche Demografiche".into(),
        rows,
    };
    let html = block_on(LocalServerRenderer::<FlatStatsTable>::with_props(props).render());
    assert!(html.contains("2 metriche disponibili"));
    assert!(html.contains("Eta Media"));
    assert!(html.contains("68,42"));
    assert!(html.contains("41.230"));
    assert!(!html.contains("Nota"));
}

#[test]
fn pivot_table_marks_gap_cells() {
    figb_web::i18n::set_lang("it");
    let table = PivotTable {
        years: vec!["2017".into(), "2018".into()],
        rows: vec![
            PivotRow {
                key: "tesserati".into(),
                label: "Tesserati".into(),
                cells: vec![Some("19.560".into()), Some("19.800".into())],
            },
            PivotRow {
                key: "variazione_tesserati_pct".into(),
                label: "Variazione Tesserati Pct".into(),
                cells: vec![None, Some("1,23".into())],
            },
        ],
    };
    let props = PivotProps {
        title: "Statistiche per Anno".into(),
        description: "Confronto temporale 2017-2018".into(),
        table,
    };
    let html = block_on(LocalServerRenderer::<PivotStatsTable>::with_props(props).render());
    assert!(html.contains("<th class=\"col-value\">2017</th>"));
    assert_eq!(html.matches("value gap").count(), 1);
    assert!(html.contains(figb_stats::GAP_MARKER));
    assert!(html.contains("1,23"));
}

#[test]
fn tab_bar_marks_active_tab() {
    let props = TabProps {
        label: "Sezioni".into(),
        items: vec![
            TabItem {
                id: "generale".into(),
                label: "Generale".into(),
            },
            TabItem {
                id: "per_anno".into(),
                label: "Per Anno".into(),
            },
        ],
        active: "per_anno".into(),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TabBar>::with_props(props).render());
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    assert!(html.contains("id=\"tab-per_anno\""));
    assert!(html.contains("tab active"));
}
