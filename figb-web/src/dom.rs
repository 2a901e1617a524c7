//! Thin wrappers over the browser globals the dashboard touches.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Storage, Window};

/// The browser `window`.
///
/// # Panics
/// Outside a browser, where there is no `window`.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("dashboard runs inside a browser window")
}

/// # Panics
/// When the window has no document attached.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("browser window has a document")
}

/// Viewport width in CSS pixels, `None` outside a browser.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Best-effort text for a rejected promise or thrown value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{value:?}"), |err| err.message().into())
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Status line and body of a `fetch()` exchange.
#[derive(Debug, Clone)]
pub struct FetchedText {
    pub status: u16,
    pub status_text: String,
    /// `None` when the body could not be read as a string. Empty for non-2xx
    /// responses, whose body is never read.
    pub body: Option<String>,
}

/// `GET` a same-origin URL and read the body as text.
///
/// # Errors
/// Network failures and body stream errors, as the rejected `JsValue`.
#[allow(clippy::future_not_send)] // JsFuture is not Send.
pub async fn fetch_text(url: &str) -> Result<FetchedText, JsValue> {
    let response: Response = JsFuture::from(window().fetch_with_str(url))
        .await?
        .dyn_into()?;
    let body = if response.ok() {
        JsFuture::from(response.text()?).await?.as_string()
    } else {
        Some(String::new())
    };
    Ok(FetchedText {
        status: response.status(),
        status_text: response.status_text(),
        body,
    })
}

/// # Errors
/// When storage is disabled (private mode, sandboxed iframes).
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage is not available"))
}
