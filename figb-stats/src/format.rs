//! Locale-aware number formatting and metric key prettification.
//!
//! Rounding works on the shortest decimal representation of the value
//! (the same digits `Display` prints), half away from zero, so `2.675`
//! renders as `2,68` the way a browser's `Intl.NumberFormat` does.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// ASCII word boundary: accented letters do not count as word characters.
static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[a-z]").expect("word-start pattern is a valid regex"));

/// Grouping and decimal separators for a display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub grouping: char,
    pub decimal: char,
}

impl NumberLocale {
    /// `it-IT`: `87.345`, `1.234,50`.
    pub const IT: Self = Self {
        grouping: '.',
        decimal: ',',
    };
    /// `en-US`: `87,345`, `1,234.50`.
    pub const EN: Self = Self {
        grouping: ',',
        decimal: '.',
    };

    /// Pick separators from a BCP 47 language tag; anything unknown uses Italian.
    #[must_use]
    pub fn for_lang(lang: &str) -> Self {
        let primary = lang.split(['-', '_']).next().unwrap_or(lang);
        if primary.eq_ignore_ascii_case("en") {
            Self::EN
        } else {
            Self::IT
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::IT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    negative: bool,
    int: String,
    frac: String,
}

impl Digits {
    fn of(value: f64) -> Self {
        let text = format!("{}", value.abs());
        let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
        Self {
            negative: value < 0.0,
            int: int.to_string(),
            frac: frac.to_string(),
        }
    }

    fn of_integer(magnitude: u64, negative: bool) -> Self {
        Self {
            negative,
            int: magnitude.to_string(),
            frac: String::new(),
        }
    }

    fn rounded(mut self, places: usize) -> Self {
        if self.frac.len() <= places {
            while self.frac.len() < places {
                self.frac.push('0');
            }
            return self;
        }

        let round_up = self.frac.as_bytes()[places] >= b'5';
        let mut kept: Vec<u8> = self
            .int
            .bytes()
            .chain(self.frac.bytes().take(places))
            .collect();
        if round_up {
            let mut idx = kept.len();
            loop {
                if idx == 0 {
                    kept.insert(0, b'1');
                    break;
                }
                idx -= 1;
                if kept[idx] == b'9' {
                    kept[idx] = b'0';
                } else {
                    kept[idx] += 1;
                    break;
                }
            }
        }

        let split = kept.len() - places;
        let (int, frac) = kept.split_at(split);
        self.int = String::from_utf8_lossy(int).into_owned();
        self.frac = String::from_utf8_lossy(frac).into_owned();
        self
    }

    fn is_zero(&self) -> bool {
        self.int.bytes().chain(self.frac.bytes()).all(|b| b == b'0')
    }

    fn render(&self, locale: NumberLocale) -> String {
        let mut out = String::with_capacity(self.int.len() + self.frac.len() + 4);
        if self.negative && !self.is_zero() {
            out.push('-');
        }
        out.push_str(&group_digits(&self.int, locale.grouping));
        if !self.frac.is_empty() {
            out.push(locale.decimal);
            out.push_str(&self.frac);
        }
        out
    }
}

fn group_digits(int: &str, separator: char) -> String {
    let len = int.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in int.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" }.to_string())
    } else {
        None
    }
}

/// Round to a whole number and group thousands (`87345.0` → `87.345`).
#[must_use]
pub fn format_integer(value: f64, locale: NumberLocale) -> String {
    non_finite(value).unwrap_or_else(|| Digits::of(value).rounded(0).render(locale))
}

/// Exactly `places` fraction digits, thousands grouped.
#[must_use]
pub fn format_fixed(value: f64, places: usize, locale: NumberLocale) -> String {
    non_finite(value).unwrap_or_else(|| Digits::of(value).rounded(places).render(locale))
}

/// Up to `max_places` fraction digits with trailing zeros trimmed, which is
/// what a locale number formatter does without explicit digit options.
#[must_use]
pub fn format_decimal(value: f64, max_places: usize, locale: NumberLocale) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }
    let mut digits = Digits::of(value).rounded(max_places);
    let trimmed = digits.frac.trim_end_matches('0').len();
    digits.frac.truncate(trimmed);
    digits.render(locale)
}

/// Integers without decimals, everything else with exactly two.
#[must_use]
pub fn format_number(value: f64, locale: NumberLocale) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format_integer(value, locale)
    } else {
        format_fixed(value, 2, locale)
    }
}

/// Shortest plain rendering of a number, no grouping and a `.` decimal point
/// (`82.5`, `80`). Used where the dashboard shows a raw value next to a unit.
#[must_use]
pub fn plain_number(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.replace('∞', "Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

fn plain_string(value: &Value, nested: bool) -> String {
    match value {
        Value::Null if nested => String::new(),
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(num) => num
            .as_f64()
            .map_or_else(|| num.to_string(), plain_number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| plain_string(item, true))
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Render a metric value for a statistics table.
///
/// Integral numbers are grouped with no decimals, other numbers get exactly
/// two decimals, strings pass through and anything else uses its plain
/// string form.
#[must_use]
pub fn format_value(value: &Value, locale: NumberLocale) -> String {
    match value {
        Value::Number(num) => {
            if let Some(int) = num.as_i64() {
                Digits::of_integer(int.unsigned_abs(), int < 0).render(locale)
            } else if let Some(uint) = num.as_u64() {
                Digits::of_integer(uint, false).render(locale)
            } else {
                num.as_f64()
                    .map_or_else(|| num.to_string(), |v| format_number(v, locale))
            }
        }
        other => plain_string(other, false),
    }
}

/// Turn a snake_case metric key into a label: underscores become spaces and
/// every word starts upper-case (`eta_media` → `Eta Media`).
#[must_use]
pub fn format_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const IT: NumberLocale = NumberLocale::IT;

    #[test]
    fn integers_are_grouped_without_decimals() {
        assert_eq!(format_integer(87345.0, IT), "87.345");
        assert_eq!(format_integer(123_770.0, IT), "123.770");
        assert_eq!(format_integer(999.0, IT), "999");
        assert_eq!(format_integer(-1_234_567.0, IT), "-1.234.567");
        assert_eq!(format_integer(0.0, IT), "0");
    }

    #[test]
    fn integer_rounding_carries_into_new_digit() {
        assert_eq!(format_integer(999.5, IT), "1.000");
        assert_eq!(format_integer(7912.6, IT), "7.913");
        assert_eq!(format_integer(-0.4, IT), "0");
    }

    #[test]
    fn fixed_uses_shortest_decimal_digits() {
        assert_eq!(format_fixed(2.675, 2, IT), "2,68");
        assert_eq!(format_fixed(1234.5, 2, IT), "1.234,50");
        assert_eq!(format_fixed(0.999, 2, IT), "1,00");
        assert_eq!(format_fixed(82.5, 2, NumberLocale::EN), "82.50");
    }

    #[test]
    fn decimal_trims_trailing_zeros() {
        assert_eq!(format_decimal(35.7, 3, IT), "35,7");
        assert_eq!(format_decimal(35.0, 3, IT), "35");
        assert_eq!(format_decimal(1.23456, 3, IT), "1,235");
    }

    #[test]
    fn plain_number_matches_script_rendering() {
        assert_eq!(plain_number(82.5), "82.5");
        assert_eq!(plain_number(80.0), "80");
        assert_eq!(plain_number(-0.0), "0");
        assert_eq!(plain_number(f64::NAN), "NaN");
    }

    #[test]
    fn values_follow_number_and_string_rules() {
        assert_eq!(format_value(&json!(123770), IT), "123.770");
        assert_eq!(format_value(&json!(5.0), IT), "5");
        assert_eq!(format_value(&json!(35.678), IT), "35,68");
        assert_eq!(format_value(&json!("2017-2024"), IT), "2017-2024");
        assert_eq!(format_value(&json!(true), IT), "true");
        assert_eq!(format_value(&json!(null), IT), "null");
        assert_eq!(format_value(&json!([1, null, "a"]), IT), "1,,a");
    }

    #[test]
    fn keys_are_spaced_and_capitalized() {
        assert_eq!(format_key("eta_media"), "Eta Media");
        assert_eq!(format_key("01_periodo_analisi"), "01 Periodo Analisi");
        assert_eq!(format_key("top10_regione"), "Top10 Regione");
        assert_eq!(format_key("rapporto_m_f"), "Rapporto M F");
        assert_eq!(format_key("Agonista_count"), "Agonista Count");
        assert_eq!(format_key("x_àbc"), "X àBc");
        assert_eq!(format_key("età_media"), "Età Media");
    }

    #[test]
    fn locale_lookup_defaults_to_italian() {
        assert_eq!(NumberLocale::for_lang("en-GB"), NumberLocale::EN);
        assert_eq!(NumberLocale::for_lang("it"), NumberLocale::IT);
        assert_eq!(NumberLocale::for_lang("xx"), NumberLocale::IT);
    }
}
