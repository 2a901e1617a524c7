mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_decimal, fmt_integer, fmt_pct_plain, fmt_value, number_locale};
pub use locales::{DEFAULT_LANG, LocaleMeta, STORAGE_KEY, locales};
pub use render::{t, tr};
