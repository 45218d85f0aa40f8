//! Browser entry point.

use themepref_adapter_web_sys::{
    DomDocument, LocalStorageStore, MediaQueryColorScheme, on_dom_ready,
};
use themepref_app::config::ThemeConfig;
use wasm_bindgen::prelude::*;

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "themepref-config";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // fails only when the host page's bundle already installed a logger
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = on_dom_ready(run) {
        tracing::warn!(error = %err, "failed to wait for DOM ready");
    }
}

fn run() {
    let Some(document) = DomDocument::from_window() else {
        tracing::warn!("no document, theme left at browser default");
        return;
    };
    let config = page_config();
    let probe = MediaQueryColorScheme::new(config.dark_query.clone());
    crate::wire(config, LocalStorageStore::from_window(), document, probe);
}

/// Configuration from `<script type="application/json" id="themepref-config">`,
/// falling back to the defaults when absent or invalid.
#[must_use]
pub fn page_config() -> ThemeConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    crate::config_from_page(text.as_deref())
}
