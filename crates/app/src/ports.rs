//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod color_scheme;
pub mod document;
pub mod preference_store;

pub use color_scheme::ColorSchemeProbe;
pub use document::{ClickHandler, DocumentHandle, ToggleControl};
pub use preference_store::PreferenceStore;
