use themepref_app::ports::ColorSchemeProbe;
use web_sys::Window;

/// OS preference read through `window.matchMedia`.
///
/// The query is evaluated on each call with no `change` listener, so a
/// preference change after load is only picked up on the next page load.
pub struct MediaQueryColorScheme {
    window: Option<Window>,
    query: String,
}

impl MediaQueryColorScheme {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            window: web_sys::window(),
            query: query.into(),
        }
    }
}

impl ColorSchemeProbe for MediaQueryColorScheme {
    fn prefers_dark(&self) -> bool {
        let Some(window) = &self.window else {
            return false;
        };
        match window.match_media(&self.query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                tracing::debug!(
                    query = %self.query,
                    error = %crate::describe(&err),
                    "matchMedia failed"
                );
                false
            }
        }
    }
}
