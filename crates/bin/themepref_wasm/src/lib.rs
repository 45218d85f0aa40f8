//! # themepref-wasm
//!
//! Composition root that wires the adapters together and runs the theme
//! controller once per page load.
//!
//! ## Responsibilities
//! - Install logging and the panic hook in the browser
//! - Read the optional page configuration
//! - Construct the browser adapters and the controller
//! - Resolve and apply the initial theme, then bind the toggle
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use themepref_app::config::ThemeConfig;
use themepref_app::ports::{ColorSchemeProbe, DocumentHandle, PreferenceStore};
use themepref_app::services::theme_controller::ThemePreferenceController;
use themepref_domain::marker::ThemeMarker;

#[cfg(target_arch = "wasm32")]
pub mod browser;

/// Result of the page-load sequence.
pub struct Startup<S, D, P> {
    /// Controller handle, shared with the toggle's click handler.
    pub controller: ThemePreferenceController<S, D, P>,
    /// Marker applied by `initialize`.
    pub marker: ThemeMarker,
    /// Whether a toggle control was found and bound.
    pub toggle_bound: bool,
}

/// Build the controller, apply the initial theme and bind the toggle.
pub fn wire<S, D, P>(config: ThemeConfig, store: S, document: D, probe: P) -> Startup<S, D, P>
where
    S: PreferenceStore + 'static,
    D: DocumentHandle + 'static,
    P: ColorSchemeProbe + 'static,
{
    let controller = ThemePreferenceController::new(config, store, document, probe);
    let marker = controller.initialize();
    let toggle_bound = controller.bind_toggle();
    tracing::info!(%marker, toggle_bound, "theme preference ready");
    Startup {
        controller,
        marker,
        toggle_bound,
    }
}

/// Configuration from the text of the page's config block, falling back to
/// the defaults when the block is absent or invalid.
#[must_use]
pub fn config_from_page(text: Option<&str>) -> ThemeConfig {
    let Some(text) = text else {
        return ThemeConfig::default();
    };
    match ThemeConfig::from_json(text) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid theme config");
            ThemeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_without_config_block() {
        assert_eq!(config_from_page(None), ThemeConfig::default());
    }

    #[test]
    fn should_use_defaults_for_invalid_json() {
        assert_eq!(config_from_page(Some("{not json")), ThemeConfig::default());
    }

    #[test]
    fn should_use_defaults_for_invalid_values() {
        let config = config_from_page(Some(r#"{"attribute": "class"}"#));
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn should_merge_partial_json_with_defaults() {
        let config = config_from_page(Some(r#"{"toggle_id": "scheme-button"}"#));
        assert_eq!(config.toggle_id, "scheme-button");
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.attribute, "data-theme");
    }
}
