//! # themepref-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — origin-scoped key/value storage surviving reloads
//!   - `DocumentHandle` — the root theme attribute and control lookup
//!   - `ToggleControl` — a clickable control
//!   - `ColorSchemeProbe` — one-shot read of the OS dark preference
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `ThemePreferenceController` — initialize, bind the toggle, toggle
//! - Own the runtime configuration (`ThemeConfig`)
//!
//! ## Dependency rule
//! Depends on `themepref-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Threading
//! Everything runs on the page's single UI thread, so ports are synchronous
//! and carry no `Send`/`Sync` bounds.

pub mod config;
pub mod ports;
pub mod services;
