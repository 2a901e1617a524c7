use figb_stats::{
    AdvancedStats, GAP_MARKER, MetricMap, NumberLocale, Section, SummaryStats, Trend, YearlyStats,
    flat_rows, format_key, pivot_table,
};
use serde_json::{Value, json};

const SUMMARY: &str = include_str!("../../figb-web/static/results/summary_stats.json");
const ADVANCED: &str = include_str!("../../figb-web/static/results/statistiche_avanzate.json");

fn object(value: Value) -> MetricMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn shipped_documents_parse() {
    let summary = SummaryStats::from_json(SUMMARY).unwrap();
    assert_eq!(summary.periodo, "2017-2024");
    assert_eq!(summary.retention_trend(), Trend::Positive);

    let advanced = AdvancedStats::from_json(ADVANCED).unwrap();
    for section in Section::ALL {
        assert!(advanced.has_section(section), "{section:?} missing");
    }
    assert_eq!(advanced.year_count(), 8);
}

#[test]
fn shipped_per_year_section_gaps_only_first_year_variations() {
    let advanced = AdvancedStats::from_json(ADVANCED).unwrap();
    let table = pivot_table(advanced.per_anno.as_ref().unwrap(), NumberLocale::IT);
    assert_eq!(table.years.first().map(String::as_str), Some("2017"));
    assert_eq!(table.years.last().map(String::as_str), Some("2024"));

    let variation = table
        .rows
        .iter()
        .find(|row| row.key == "variazione_tesserati_pct")
        .unwrap();
    let cells: Vec<_> = variation.display_cells().collect();
    assert_eq!(cells[0], GAP_MARKER);
    assert!(cells[1..].iter().all(|cell| *cell != GAP_MARKER));
    assert_eq!(table.gap_count(), 2);
}

#[test]
fn pivot_is_independent_of_year_insertion_order() {
    let entries = [
        ("2019", json!({"tesserati": 16310, "eta_media": 67.8})),
        ("2017", json!({"tesserati": 16820, "eta_media": 67.1})),
        ("2018", json!({"tesserati": 16540, "eta_media": 67.4})),
    ];

    let mut forward = YearlyStats::new();
    for (year, metrics) in &entries {
        forward.insert((*year).to_string(), object(metrics.clone()));
    }
    let mut backward = YearlyStats::new();
    for (year, metrics) in entries.iter().rev() {
        backward.insert((*year).to_string(), object(metrics.clone()));
    }

    let a = pivot_table(&forward, NumberLocale::IT);
    let b = pivot_table(&backward, NumberLocale::IT);
    assert_eq!(a, b);
    assert_eq!(a.years, ["2017", "2018", "2019"]);
    assert_eq!(a.rows[0].label, "Tesserati");
    assert_eq!(
        a.rows[1].display_cells().collect::<Vec<_>>(),
        ["67,10", "67,40", "67,80"]
    );
}

#[test]
fn pivot_rows_cover_keys_missing_from_first_year() {
    let mut per_year = YearlyStats::new();
    per_year.insert("2017".into(), object(json!({"tesserati": 10})));
    per_year.insert(
        "2018".into(),
        object(json!({"tesserati": 12, "variazione_tesserati_pct": 20.0, "_calcolato": true})),
    );

    let table = pivot_table(&per_year, NumberLocale::IT);
    let keys: Vec<_> = table.rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, ["tesserati", "variazione_tesserati_pct"]);
    assert_eq!(
        table.rows[1].display_cells().collect::<Vec<_>>(),
        [GAP_MARKER, "20"]
    );
}

#[test]
fn flat_rows_keep_document_order_and_hide_metadata() {
    let advanced = AdvancedStats::from_json(
        r#"{"circoli": {"z_ultimo": 1, "_fonte": "xlsx", "a_primo": 2.5}}"#,
    )
    .unwrap();
    let rows = flat_rows(
        advanced.flat_section(Section::Circoli).unwrap(),
        NumberLocale::IT,
    );
    let labels: Vec<_> = rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, ["Z Ultimo", "A Primo"]);
    assert_eq!(rows[1].value, "2,50");
}

#[test]
fn english_locale_swaps_separators() {
    let section = object(json!({"punti_totali": 979_305_200, "gare_media": 34.33}));
    let rows = flat_rows(&section, NumberLocale::EN);
    assert_eq!(rows[0].value, "979,305,200");
    assert_eq!(rows[1].value, "34.33");
}

#[test]
fn every_shipped_key_gets_a_readable_label() {
    let advanced = AdvancedStats::from_json(ADVANCED).unwrap();
    for section in Section::ALL {
        let Some(map) = advanced.flat_section(section) else {
            continue;
        };
        for key in map.keys() {
            let label = format_key(key);
            assert!(!label.contains('_'), "{key} -> {label}");
            assert!(
                label
                    .split(' ')
                    .filter_map(|word| word.chars().next())
                    .all(|ch| !ch.is_lowercase()),
                "{key} -> {label}"
            );
        }
    }
}
