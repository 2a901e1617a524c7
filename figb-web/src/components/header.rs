use crate::i18n::{self, set_lang, t, tr};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Years covered by the offline analysis, shown in the header.
pub const PERIOD: &str = "2017-2024";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub expanded: bool,
    pub on_toggle: Callback<()>,
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    let on_toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let toggle_label = if p.expanded {
        t("app.close_menu")
    } else {
        t("app.open_menu")
    };
    let period = tr("app.period", Some(&BTreeMap::from([("period", PERIOD)])));

    html! {
        <header role="banner" class="dashboard-header">
            <a href="#main" class="sr-only">{ t("app.skip_to_content") }</a>
            <div class="header-left">
                <button
                    type="button"
                    class="sidebar-toggle"
                    aria-controls="sidebar"
                    aria-expanded={p.expanded.to_string()}
                    aria-label={toggle_label}
                    onclick={on_toggle}
                >
                    { if p.expanded { "✕" } else { "☰" } }
                </button>
                <h1 class="app-title">{ t("app.title") }</h1>
            </div>
            <div class="header-right">
                <span class="period">{ period }</span>
                <label for="lang-select" class="sr-only">{ t("app.language") }</label>
                <select id="lang-select" onchange={on_change} aria-label={t("app.language")}>
                    { for i18n::locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == p.current_lang}>
                            { meta.name }
                        </option>
                    }) }
                </select>
            </div>
        </header>
    }
}
