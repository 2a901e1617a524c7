use figb_stats::{AdvancedStats, FetchState, LoadError, SummaryStats};
use figb_web::pages::{
    categorie::CategoriePage,
    churn::ChurnPage,
    demografia::DemografiaPage,
    overview::{OverviewView, ViewProps as OverviewProps},
    regionale::RegionalePage,
    retention::RetentionPage,
    statistiche::{StatisticheView, ViewProps as StatisticheProps},
    temporale::TemporalePage,
    tessere::TesserePage,
};
use futures::executor::block_on;
use yew::{AttrValue, BaseComponent, LocalServerRenderer};

const ADVANCED: &str = include_str!("../static/results/statistiche_avanzate.json");

fn summary() -> SummaryStats {
    SummaryStats {
        periodo: "2017-2024".into(),
        totale_tesseramenti: 123_770.0,
        giocatori_unici: 87_345.0,
        circoli_unici: 412.0,
        regioni: 20.0,
        eta_media: 68.4,
        eta_mediana: 70.0,
        gare_media: 35.742,
        punti_medi: 12_345.6,
        percentuale_maschi: 52.3,
        percentuale_femmine: 47.7,
        retention_rate_medio: 82.5,
        ..SummaryStats::default()
    }
}

fn render_overview(state: FetchState<SummaryStats>) -> String {
    block_on(LocalServerRenderer::<OverviewView>::with_props(OverviewProps { state }).render())
}

fn render_statistiche(state: FetchState<AdvancedStats>, tab: &'static str) -> String {
    let props = StatisticheProps {
        state,
        initial_tab: AttrValue::Static(tab),
    };
    block_on(LocalServerRenderer::<StatisticheView>::with_props(props).render())
}

fn render_static<C>() -> String
where
    C: BaseComponent<Properties = ()>,
{
    block_on(LocalServerRenderer::<C>::new().render())
}

#[test]
fn overview_formats_kpis_for_italian() {
    figb_web::i18n::set_lang("it");
    let html = render_overview(FetchState::from_outcome(Ok(summary())));
    assert!(html.contains("Giocatori Unici"));
    assert!(html.contains("87.345"));
    assert!(html.contains("82.5%"));
    assert!(html.contains("Positivo"));
    assert!(html.contains("68.4 anni"));
    assert!(html.contains("Mediana: 70 anni"));
    assert!(html.contains("35,742"));
    assert!(html.contains("12.346"));
    assert!(html.contains("width: 52.3%"));
    assert!(html.contains("01_trend_tesseramenti.png"));
    assert!(html.contains("02_distribuzione_regionale.png"));
}

#[test]
fn overview_flags_low_retention() {
    figb_web::i18n::set_lang("it");
    let stats = SummaryStats {
        retention_rate_medio: 71.0,
        ..summary()
    };
    let html = render_overview(FetchState::from_outcome(Ok(stats)));
    assert!(html.contains("71%"));
    assert!(html.contains("Attenzione"));
    assert!(!html.contains("Positivo"));
}

#[test]
fn overview_uses_english_grouping() {
    figb_web::i18n::set_lang("en");
    let html = render_overview(FetchState::from_outcome(Ok(summary())));
    assert!(html.contains("Unique Players"));
    assert!(html.contains("87,345"));
    assert!(html.contains("82.5%"));
    figb_web::i18n::set_lang("it");
}

#[test]
fn overview_loading_and_error_states() {
    figb_web::i18n::set_lang("it");
    let html = render_overview(FetchState::Loading);
    assert!(html.contains("Caricamento dati..."));
    assert!(!html.contains("Giocatori Unici"));

    let failed = FetchState::from_outcome(Err(LoadError::Status {
        status: 404,
        status_text: "Not Found".into(),
    }));
    let html = render_overview(failed);
    assert!(html.contains("Errore nel caricamento dei dati"));
    assert!(html.contains("role=\"alert\""));
    assert!(!html.contains("404"));
}

#[test]
fn statistiche_general_tab_shows_flat_table() {
    figb_web::i18n::set_lang("it");
    let stats = AdvancedStats::from_json(ADVANCED).unwrap();
    let html = render_statistiche(FetchState::from_outcome(Ok(stats)), "generale");
    assert!(html.contains("Statistiche Generali"));
    assert!(html.contains("02 Totale Record"));
    assert!(html.contains("123.770"));
    assert!(html.contains("aria-selected=\"true\""));
    assert!(html.contains("Note Metodologiche"));
    assert!(!html.contains("Statistiche per Anno"));
}

#[test]
fn statistiche_yearly_tab_shows_pivot_with_gaps() {
    figb_web::i18n::set_lang("it");
    let stats = AdvancedStats::from_json(ADVANCED).unwrap();
    let html = render_statistiche(FetchState::from_outcome(Ok(stats)), "per_anno");
    assert!(html.contains("Statistiche per Anno"));
    assert!(html.contains("Confronto temporale 2017-2024"));
    assert!(html.contains("Variazione Tesserati Pct"));
    assert!(html.contains("value gap"));
    assert!(html.contains(figb_stats::GAP_MARKER));
}

#[test]
fn statistiche_omits_missing_section() {
    figb_web::i18n::set_lang("it");
    let stats = AdvancedStats::from_json(r#"{"punti": {"punti_medi": 12.5}}"#).unwrap();
    let html = render_statistiche(FetchState::from_outcome(Ok(stats.clone())), "generale");
    assert!(!html.contains("Statistiche Generali"));
    assert!(html.contains("Panoramica Statistiche"));

    let html = render_statistiche(FetchState::from_outcome(Ok(stats)), "punti");
    assert!(html.contains("Statistiche Punti"));
    assert!(html.contains("12,50"));
    assert!(html.contains("1 metriche disponibili"));
}

#[test]
fn statistiche_loading_and_error_states() {
    figb_web::i18n::set_lang("it");
    let html = render_statistiche(FetchState::Loading, "generale");
    assert!(html.contains("Caricamento statistiche..."));

    let failed = FetchState::from_outcome(Err(LoadError::Request("offline".into())));
    let html = render_statistiche(failed, "generale");
    assert!(html.contains("Errore nel caricamento delle statistiche"));
    assert!(!html.contains("offline"));
}

#[test]
fn narrative_pages_render_titles_and_charts() {
    figb_web::i18n::set_lang("it");
    let cases = [
        (render_static::<TemporalePage>(), "Analisi Temporale", "10_trend_regionale.png"),
        (render_static::<RegionalePage>(), "Analisi Regionale", "02_distribuzione_regionale.png"),
        (render_static::<DemografiaPage>(), "Analisi Demografica", "03_piramide_eta.png"),
        (render_static::<CategoriePage>(), "Analisi Categorie", "07_heatmap_categorie.png"),
        (render_static::<RetentionPage>(), "Retention Rate", "05_retention_per_eta.png"),
        (render_static::<ChurnPage>(), "Churn Analysis", "08_churn_per_eta.png"),
        (render_static::<TesserePage>(), "Tipologie Tessera", "06_tipologie_tessera.png"),
    ];
    for (html, title, chart) in cases {
        assert!(html.contains(&format!("<h2 class=\"page-title\">{title}</h2>")), "{title}");
        assert!(html.contains(&format!("/charts/{chart}")), "{title}: {chart}");
        assert!(html.contains("findings-card"), "{title}");
    }
}

#[test]
fn tessere_activity_table_uses_locale_numbers() {
    figb_web::i18n::set_lang("it");
    let html = render_static::<TesserePage>();
    assert!(html.contains("Agonista"));
    assert!(html.contains("69,8"));
    assert!(html.contains("44.419"));

    figb_web::i18n::set_lang("en");
    let html = render_static::<TesserePage>();
    assert!(html.contains("44,419"));
    figb_web::i18n::set_lang("it");
}
