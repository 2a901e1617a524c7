use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlSelectElement};
use yew::Renderer;

use figb_web::app::App;
use figb_web::app::sidebar::LG_BREAKPOINT_PX;
use figb_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    figb_web::i18n::set_lang("it");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

/// Let the scheduler flush pending renders.
async fn settle() {
    for _ in 0..3 {
        let tick = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
        wasm_bindgen_futures::JsFuture::from(tick)
            .await
            .expect("resolved promise");
    }
}

fn query(selector: &str) -> Option<HtmlElement> {
    dom::document()
        .query_selector(selector)
        .expect("valid selector")
        .and_then(|el| el.dyn_into().ok())
}

fn expanded() -> String {
    toggle_button().get_attribute("aria-expanded").unwrap_or_default()
}

async fn open_sidebar() {
    if expanded() != "true" {
        toggle_button().click();
        settle().await;
    }
    assert_eq!(expanded(), "true");
    assert!(query(".sidebar.open").is_some());
}

fn toggle_button() -> HtmlElement {
    dom::document()
        .query_selector(".sidebar-toggle")
        .expect("query toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("cast to element")
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
}

#[wasm_bindgen_test]
fn language_select_updates_html_lang_and_storage() {
    render_app();
    let doc = dom::document();
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("lang select")
        .dyn_into()
        .expect("cast to select");
    select.set_value("en");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");

    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
    let stored = dom::local_storage()
        .expect("storage")
        .get_item(figb_web::i18n::STORAGE_KEY)
        .expect("read storage");
    assert_eq!(stored.as_deref(), Some("en"));

    figb_web::i18n::set_lang("it");
    assert_eq!(html.get_attribute("lang"), Some("it".into()));
}

#[wasm_bindgen_test]
fn sidebar_toggle_flips_aria_expanded() {
    render_app();
    let button = toggle_button();
    let before = button.get_attribute("aria-expanded").unwrap_or_default();
    button.click();
    let after = toggle_button().get_attribute("aria-expanded").unwrap_or_default();
    assert_ne!(before, after, "toggle should flip the sidebar state");
}

#[wasm_bindgen_test]
async fn overlay_click_collapses_sidebar() {
    render_app();
    settle().await;
    open_sidebar().await;
    let overlay = query(".sidebar-overlay").expect("overlay while open");
    overlay.click();
    settle().await;
    assert_eq!(expanded(), "false");
    assert!(query(".sidebar-overlay").is_none());
    assert!(query(".sidebar.open").is_none());
}

#[wasm_bindgen_test]
async fn nav_click_collapses_only_narrow_viewports() {
    render_app();
    settle().await;
    open_sidebar().await;
    let wide = dom::viewport_width().is_some_and(|w| w >= LG_BREAKPOINT_PX);
    query(".nav-item").expect("nav item").click();
    settle().await;
    if wide {
        assert_eq!(expanded(), "true");
        assert!(query(".sidebar.open").is_some());
    } else {
        assert_eq!(expanded(), "false");
        assert!(query(".sidebar-overlay").is_none());
    }
}
