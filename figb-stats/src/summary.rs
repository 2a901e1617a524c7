use serde::{Deserialize, Serialize};

/// Retention at or above this mean is flagged as a positive trend.
pub const RETENTION_POSITIVE_THRESHOLD: f64 = 80.0;

/// Headline figures produced by the offline analysis (`summary_stats.json`).
///
/// Every numeric field is a plain decimal number and percentages are already
/// scaled to 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SummaryStats {
    pub periodo: String,
    pub totale_tesseramenti: f64,
    pub giocatori_unici: f64,
    pub circoli_unici: f64,
    pub regioni: f64,
    pub eta_media: f64,
    pub eta_mediana: f64,
    pub gare_media: f64,
    pub punti_medi: f64,
    pub percentuale_maschi: f64,
    pub percentuale_femmine: f64,
    pub retention_rate_medio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anni_analizzati: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gare_totali: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Attention,
}

impl SummaryStats {
    /// Parse the summary document.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or a required field is missing.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn retention_trend(&self) -> Trend {
        if self.retention_rate_medio >= RETENTION_POSITIVE_THRESHOLD {
            Trend::Positive
        } else {
            Trend::Attention
        }
    }

    /// Bar widths for the gender split, clamped to a valid CSS percentage.
    #[must_use]
    pub fn gender_split(&self) -> (f64, f64) {
        (
            self.percentuale_maschi.clamp(0.0, 100.0),
            self.percentuale_femmine.clamp(0.0, 100.0),
        )
    }
}
