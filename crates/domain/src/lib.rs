//! # themepref-domain
//!
//! Pure domain model for the light/dark theme preference.
//!
//! ## Responsibilities
//! - Define the [`Theme`](theme::Theme) value (`light` / `dark`)
//! - Define the document [`ThemeMarker`](marker::ThemeMarker) state machine
//!   (`Unset` → `Light` / `Dark`) and its click transition
//! - Parse the persisted preference record, treating garbage as absent
//! - Resolve the initial marker from the stored choice and the OS preference
//! - Error conventions shared by the ports
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod marker;
pub mod preference;
pub mod theme;
