use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A flat section: metric name to number or string, in document order.
pub type MetricMap = Map<String, Value>;

/// Year string to that year's metrics. Keys iterate in lexicographic order.
pub type YearlyStats = BTreeMap<String, MetricMap>;

/// The advanced statistics document (`statistiche_avanzate.json`).
///
/// Every section is optional; a missing section is simply not shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdvancedStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generale: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demografiche: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regionali: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attivita: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punti: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorie: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipologie_tessera: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circoli: Option<MetricMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_anno: Option<YearlyStats>,
}

/// Tabs of the advanced statistics page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Generale,
    PerAnno,
    Demografiche,
    Regionali,
    Attivita,
    Punti,
    Categorie,
    TipologieTessera,
    Retention,
    Circoli,
}

impl Section {
    pub const ALL: [Self; 10] = [
        Self::Generale,
        Self::PerAnno,
        Self::Demografiche,
        Self::Regionali,
        Self::Attivita,
        Self::Punti,
        Self::Categorie,
        Self::TipologieTessera,
        Self::Retention,
        Self::Circoli,
    ];

    /// Field name in the JSON document, also used as the i18n key suffix.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Generale => "generale",
            Self::PerAnno => "per_anno",
            Self::Demografiche => "demografiche",
            Self::Regionali => "regionali",
            Self::Attivita => "attivita",
            Self::Punti => "punti",
            Self::Categorie => "categorie",
            Self::TipologieTessera => "tipologie_tessera",
            Self::Retention => "retention",
            Self::Circoli => "circoli",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    #[must_use]
    pub const fn is_pivot(self) -> bool {
        matches!(self, Self::PerAnno)
    }
}

impl AdvancedStats {
    /// Parse the advanced statistics document.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or a section has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The flat mapping behind a tab. `PerAnno` is two-level and returns `None`;
    /// use [`AdvancedStats::per_anno`] for it.
    #[must_use]
    pub const fn flat_section(&self, section: Section) -> Option<&MetricMap> {
        match section {
            Section::Generale => self.generale.as_ref(),
            Section::Demografiche => self.demografiche.as_ref(),
            Section::Regionali => self.regionali.as_ref(),
            Section::Attivita => self.attivita.as_ref(),
            Section::Punti => self.punti.as_ref(),
            Section::Categorie => self.categorie.as_ref(),
            Section::TipologieTessera => self.tipologie_tessera.as_ref(),
            Section::Retention => self.retention.as_ref(),
            Section::Circoli => self.circoli.as_ref(),
            Section::PerAnno => None,
        }
    }

    #[must_use]
    pub fn has_section(&self, section: Section) -> bool {
        if section.is_pivot() {
            self.per_anno.is_some()
        } else {
            self.flat_section(section).is_some()
        }
    }

    /// Count of displayable metrics across every section, pivot cells included.
    #[must_use]
    pub fn metric_count(&self) -> usize {
        let flat: usize = Section::ALL
            .into_iter()
            .filter_map(|section| self.flat_section(section))
            .map(|map| map.keys().filter(|key| !key.starts_with('_')).count())
            .sum();
        let yearly: usize = self
            .per_anno
            .iter()
            .flat_map(BTreeMap::values)
            .map(|map| map.keys().filter(|key| !key.starts_with('_')).count())
            .sum();
        flat + yearly
    }

    /// Number of years covered by the per-year section.
    #[must_use]
    pub fn year_count(&self) -> usize {
        self.per_anno.as_ref().map_or(0, BTreeMap::len)
    }
}
