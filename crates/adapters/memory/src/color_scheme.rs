use std::cell::Cell;

use themepref_app::ports::ColorSchemeProbe;

/// OS preference fixed at construction.
#[derive(Debug, Default)]
pub struct FixedColorScheme {
    prefers_dark: bool,
    queries: Cell<usize>,
}

impl FixedColorScheme {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark,
            queries: Cell::new(0),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn light() -> Self {
        Self::new(false)
    }

    /// How many times the preference has been read.
    #[must_use]
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.prefers_dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_configured_preference() {
        assert!(FixedColorScheme::dark().prefers_dark());
        assert!(!FixedColorScheme::light().prefers_dark());
    }

    #[test]
    fn should_count_queries() {
        let probe = FixedColorScheme::dark();
        assert_eq!(probe.queries(), 0);
        probe.prefers_dark();
        probe.prefers_dark();
        assert_eq!(probe.queries(), 2);
    }
}
