/// Directory the offline process writes chart images to, relative to the site root.
pub const CHARTS_DIR: &str = "charts";

/// The pre-rendered chart images shipped next to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chart {
    TrendTesseramenti,
    DistribuzioneRegionale,
    PiramideEta,
    RetentionRate,
    RetentionPerEta,
    TipologieTessera,
    HeatmapCategorie,
    ChurnPerEta,
    GarePerEta,
    TrendRegionale,
}

impl Chart {
    pub const ALL: [Self; 10] = [
        Self::TrendTesseramenti,
        Self::DistribuzioneRegionale,
        Self::PiramideEta,
        Self::RetentionRate,
        Self::RetentionPerEta,
        Self::TipologieTessera,
        Self::HeatmapCategorie,
        Self::ChurnPerEta,
        Self::GarePerEta,
        Self::TrendRegionale,
    ];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::TrendTesseramenti => "01_trend_tesseramenti.png",
            Self::DistribuzioneRegionale => "02_distribuzione_regionale.png",
            Self::PiramideEta => "03_piramide_eta.png",
            Self::RetentionRate => "04_retention_rate.png",
            Self::RetentionPerEta => "05_retention_per_eta.png",
            Self::TipologieTessera => "06_tipologie_tessera.png",
            Self::HeatmapCategorie => "07_heatmap_categorie.png",
            Self::ChurnPerEta => "08_churn_per_eta.png",
            Self::GarePerEta => "09_gare_per_eta.png",
            Self::TrendRegionale => "10_trend_regionale.png",
        }
    }

    /// Site-relative path, e.g. `charts/01_trend_tesseramenti.png`.
    #[must_use]
    pub fn relative_path(self) -> String {
        format!("{CHARTS_DIR}/{}", self.file_name())
    }

    /// Key under `charts.` in the localization bundle for the alt text.
    #[must_use]
    pub fn i18n_key(self) -> String {
        let stem = self.file_name().trim_end_matches(".png");
        let name = stem.split_once('_').map_or(stem, |(_, name)| name);
        format!("charts.{name}")
    }
}
