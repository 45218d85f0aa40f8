//! Theme marker — the value of the root element's theme attribute.
//!
//! Transitions after [`resolve`] only happen on a toggle click:
//! `Unset -> Dark`, `Light -> Dark`, `Dark -> Light`.

use crate::theme::Theme;

/// State of the document's theme attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMarker {
    /// No attribute; the stylesheet's default presentation applies.
    #[default]
    Unset,
    Light,
    Dark,
}

impl ThemeMarker {
    /// Read a marker from a raw attribute value.
    ///
    /// Anything other than exactly `"light"` or `"dark"` counts as unset.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Unset,
        }
    }

    /// The theme this marker explicitly selects, if any.
    #[must_use]
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Unset => None,
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
        }
    }

    /// The attribute value to write, or `None` to leave it untouched.
    #[must_use]
    pub fn attribute_value(self) -> Option<&'static str> {
        self.theme().map(Theme::as_str)
    }

    /// Theme selected by a toggle click from this state.
    ///
    /// Anything other than `Dark` (including `Unset`) goes to dark.
    #[must_use]
    pub fn next_on_click(self) -> Theme {
        match self {
            Self::Dark => Theme::Light,
            Self::Unset | Self::Light => Theme::Dark,
        }
    }
}

impl From<Theme> for ThemeMarker {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attribute_value().unwrap_or("unset"))
    }
}

/// Resolve the initial marker.
///
/// Priority: stored choice, then the OS dark preference, then unset.
/// A light OS preference never produces an explicit `Light` marker.
#[must_use]
pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> ThemeMarker {
    match stored {
        Some(theme) => theme.into(),
        None if prefers_dark => ThemeMarker::Dark,
        None => ThemeMarker::Unset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_unset() {
        assert_eq!(ThemeMarker::default(), ThemeMarker::Unset);
    }

    #[test]
    fn should_read_marker_from_attribute() {
        assert_eq!(ThemeMarker::from_attribute(None), ThemeMarker::Unset);
        assert_eq!(ThemeMarker::from_attribute(Some("dark")), ThemeMarker::Dark);
        assert_eq!(ThemeMarker::from_attribute(Some("light")), ThemeMarker::Light);
        assert_eq!(ThemeMarker::from_attribute(Some("sepia")), ThemeMarker::Unset);
    }

    #[test]
    fn should_resolve_per_priority_table() {
        let cases = [
            (None, false, ThemeMarker::Unset),
            (None, true, ThemeMarker::Dark),
            (Some(Theme::Light), false, ThemeMarker::Light),
            (Some(Theme::Light), true, ThemeMarker::Light),
            (Some(Theme::Dark), false, ThemeMarker::Dark),
            (Some(Theme::Dark), true, ThemeMarker::Dark),
        ];
        for (stored, prefers_dark, expected) in cases {
            assert_eq!(
                resolve(stored, prefers_dark),
                expected,
                "stored={stored:?} prefers_dark={prefers_dark}"
            );
        }
    }

    #[test]
    fn should_go_dark_on_first_click_from_unset() {
        assert_eq!(ThemeMarker::Unset.next_on_click(), Theme::Dark);
    }

    #[test]
    fn should_cycle_with_period_two() {
        let mut marker = ThemeMarker::Unset;
        let mut seen = Vec::new();
        for _ in 0..4 {
            let next = marker.next_on_click();
            seen.push(next);
            marker = next.into();
        }
        assert_eq!(seen, [Theme::Dark, Theme::Light, Theme::Dark, Theme::Light]);
    }

    #[test]
    fn should_display_attribute_value_or_unset() {
        assert_eq!(ThemeMarker::Dark.to_string(), "dark");
        assert_eq!(ThemeMarker::Unset.to_string(), "unset");
    }
}
