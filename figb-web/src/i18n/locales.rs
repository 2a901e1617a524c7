use serde_json::Value;

/// Language used when nothing is saved and as the lookup fallback.
pub const DEFAULT_LANG: &str = "it";

/// `localStorage` key holding the chosen language.
pub const STORAGE_KEY: &str = "figb.locale";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "it",
        name: "Italiano",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("it", include_str!("../../i18n/it.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|meta| meta.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(bundle)
        .map_err(|err| log::error!("invalid {lang} bundle: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            for (key, child) in map {
                leaf_keys(child, &format!("{prefix}{key}."), out);
            }
        } else {
            out.push(prefix.trim_end_matches('.').to_string());
        }
    }

    #[test]
    fn every_locale_parses() {
        for meta in locales() {
            assert!(load_translations(meta.code).is_some(), "{}", meta.code);
        }
        assert!(load_translations("xx").is_none());
    }

    #[test]
    fn bundles_share_the_same_keys() {
        let mut it = Vec::new();
        let mut en = Vec::new();
        leaf_keys(&load_translations("it").unwrap(), "", &mut it);
        leaf_keys(&load_translations("en").unwrap(), "", &mut en);
        it.sort();
        en.sort();
        assert_eq!(it, en);
    }
}
