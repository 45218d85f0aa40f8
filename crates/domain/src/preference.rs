//! Preference record — the single persisted `theme` key.
//!
//! Absence of the key means the user has not made an explicit choice yet.
//! A value that is not a serialized [`Theme`] is treated the same way; it is
//! left in storage untouched until the next toggle overwrites it.

use crate::theme::Theme;

/// Interpret a raw stored value as an explicit choice, if it is one.
#[must_use]
pub fn parse(raw: Option<&str>) -> Option<Theme> {
    raw.and_then(|value| value.parse().ok())
}

/// The value to persist for `theme`.
#[must_use]
pub fn serialize(theme: Theme) -> &'static str {
    theme.as_str()
}
