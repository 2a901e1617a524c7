#[cfg(target_arch = "wasm32")]
use crate::i18n::locales::STORAGE_KEY;
use crate::i18n::locales::{DEFAULT_LANG, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        build_bundle(&saved_lang())
            .or_else(|| build_bundle(DEFAULT_LANG))
            .unwrap_or_else(empty_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language.
///
/// Unknown codes are ignored. In the browser the choice is written to
/// `<html lang>` and persisted to `localStorage`.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale {lang:?}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().document_element() {
            let _ = el.set_attribute("lang", lang);
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(STORAGE_KEY, lang);
        }
    }
}

/// Code of the active language (`it` or `en`).
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
