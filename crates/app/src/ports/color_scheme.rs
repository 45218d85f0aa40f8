//! Color scheme port — the OS / user-agent color-scheme preference.

use std::rc::Rc;

/// Read-only view of the environment's color-scheme preference.
///
/// Queried once at load time; changes afterwards are not followed.
pub trait ColorSchemeProbe {
    /// Whether the environment prefers a dark color scheme.
    ///
    /// Environments without media-query support report `false`.
    fn prefers_dark(&self) -> bool;
}

impl<T: ColorSchemeProbe + ?Sized> ColorSchemeProbe for Rc<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

impl<T: ColorSchemeProbe + ?Sized> ColorSchemeProbe for &T {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}
