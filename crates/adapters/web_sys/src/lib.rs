//! # themepref-adapter-web-sys
//!
//! Browser implementations of the `themepref-app` ports.
//!
//! | Port | Implementation | Backed by |
//! |------|----------------|-----------|
//! | `PreferenceStore` | [`LocalStorageStore`] | `window.localStorage` |
//! | `DocumentHandle` | [`DomDocument`] | `document.documentElement`, `getElementById` |
//! | `ToggleControl` | [`DomToggle`] | `click` listener on an element |
//! | `ColorSchemeProbe` | [`MediaQueryColorScheme`] | `window.matchMedia(query).matches` |
//!
//! Missing browser capabilities (no `localStorage` in a sandboxed frame, no
//! `matchMedia`) surface as port errors or a `false` preference; the
//! controller turns them into the default presentation.
//!
//! ## Dependency rule
//!
//! Depends on `themepref-app` (port traits) and `themepref-domain` only.

mod color_scheme;
mod document;
mod ready;
mod store;

pub use color_scheme::MediaQueryColorScheme;
pub use document::{DomDocument, DomToggle};
pub use ready::on_dom_ready;
pub use store::LocalStorageStore;

use wasm_bindgen::JsValue;

/// Human-readable form of a thrown JS value.
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
