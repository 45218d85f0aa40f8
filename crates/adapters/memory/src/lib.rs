//! # themepref-adapter-memory
//!
//! In-memory implementations of every port, for driving the controller
//! outside a browser.
//!
//! | Port | Implementation | Behaviour |
//! |------|----------------|-----------|
//! | `PreferenceStore` | [`MemoryPreferenceStore`] | `HashMap` backed, can simulate failing reads/writes |
//! | `DocumentHandle` | [`MemoryDocument`] | Root attributes plus controls registered by id |
//! | `ToggleControl` | [`MemoryToggle`] | [`click`](MemoryToggle::click) runs every registered handler |
//! | `ColorSchemeProbe` | [`FixedColorScheme`] | Constant answer, counts queries |
//!
//! ## Dependency rule
//!
//! Depends on `themepref-app` (port traits) and `themepref-domain` only.

mod color_scheme;
mod document;
mod store;

pub use color_scheme::FixedColorScheme;
pub use document::{MemoryDocument, MemoryToggle};
pub use store::MemoryPreferenceStore;
