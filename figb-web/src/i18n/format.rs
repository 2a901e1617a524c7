//! Number formatting for the active language.
//!
//! Everything goes through the `figb-stats` formatters so the browser and the
//! native renderer produce identical strings.
use crate::i18n::bundle::with_bundle;
use figb_stats::{NumberLocale, format};
use serde_json::Value;

#[must_use]
pub fn number_locale() -> NumberLocale {
    with_bundle(|bundle| NumberLocale::for_lang(&bundle.lang))
}

/// Rounded and grouped (`87345` → `87.345`).
#[must_use]
pub fn fmt_integer(num: f64) -> String {
    format::format_integer(num, number_locale())
}

/// Grouped with up to `max_places` decimals, trailing zeros dropped.
#[must_use]
pub fn fmt_decimal(num: f64, max_places: usize) -> String {
    format::format_decimal(num, max_places, number_locale())
}

#[must_use]
pub fn fmt_value(value: &Value) -> String {
    format::format_value(value, number_locale())
}

/// Plain number followed by `%` (`82.5%`).
#[must_use]
pub fn fmt_pct_plain(num: f64) -> String {
    format!("{}%", format::plain_number(num))
}
