//! # themepref-sim
//!
//! Simulates page loads against the in-memory adapter: resolves the initial
//! theme, clicks the toggle a number of times, then reloads to show what the
//! next visit would render.
//!
//! Driven by environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `THEMEPREF_STORED` | unset | Preference record before the first load |
//! | `THEMEPREF_OS_DARK` | `false` | OS prefers a dark color scheme |
//! | `THEMEPREF_CLICKS` | `0` | Toggle clicks during the first visit |
//! | `THEMEPREF_TOGGLE` | `true` | Whether the page has a toggle control |
//! | `RUST_LOG` | `themepref=info` | Log filter |

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    sim::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod sim {
    use std::rc::Rc;

    use themepref_adapter_memory::{FixedColorScheme, MemoryDocument, MemoryPreferenceStore};
    use themepref_app::config::ThemeConfig;
    use themepref_app::ports::DocumentHandle;
    use tracing_subscriber::EnvFilter;

    /// Simulation parameters.
    #[derive(Debug, Default, PartialEq, Eq)]
    pub struct SimConfig {
        pub stored: Option<String>,
        pub os_dark: bool,
        pub clicks: usize,
        pub without_toggle: bool,
    }

    impl SimConfig {
        /// Read parameters through `lookup`; unparsable values keep defaults.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let mut config = Self::default();
            if let Some(val) = lookup("THEMEPREF_STORED") {
                config.stored = Some(val);
            }
            if let Some(val) = lookup("THEMEPREF_OS_DARK") {
                config.os_dark = parse_flag(&val).unwrap_or(config.os_dark);
            }
            if let Some(val) = lookup("THEMEPREF_CLICKS") {
                if let Ok(clicks) = val.parse() {
                    config.clicks = clicks;
                }
            }
            if let Some(val) = lookup("THEMEPREF_TOGGLE") {
                config.without_toggle = !parse_flag(&val).unwrap_or(true);
            }
            config
        }
    }

    fn parse_flag(value: &str) -> Option<bool> {
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    pub fn run() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("themepref=info")),
            )
            .init();

        let sim = SimConfig::from_lookup(|key| std::env::var(key).ok());
        let config = ThemeConfig::default();

        let store = Rc::new(match &sim.stored {
            Some(value) => MemoryPreferenceStore::seeded(&config.storage_key, value),
            None => MemoryPreferenceStore::new(),
        });

        let (marker, after_clicks) = {
            let document = Rc::new(MemoryDocument::new());
            let toggle = (!sim.without_toggle).then(|| document.add_control(&config.toggle_id));
            let startup = themepref_wasm::wire(
                config.clone(),
                Rc::clone(&store),
                Rc::clone(&document),
                FixedColorScheme::new(sim.os_dark),
            );
            if let Some(toggle) = &toggle {
                for _ in 0..sim.clicks {
                    toggle.click();
                }
            }
            let after_clicks = document.root_attribute(&config.attribute);
            // breaks the document -> toggle -> controller -> document cycle
            document.remove_control(&config.toggle_id);
            (startup.marker, after_clicks)
        };

        let reloaded = Rc::new(MemoryDocument::new());
        let next_visit = themepref_wasm::wire(
            config.clone(),
            Rc::clone(&store),
            Rc::clone(&reloaded),
            FixedColorScheme::new(sim.os_dark),
        )
        .marker;

        println!("initial marker:   {marker}");
        println!(
            "after {} click(s): {}",
            sim.clicks,
            after_clicks.as_deref().unwrap_or("unset")
        );
        println!(
            "stored record:    {}",
            store.value(&config.storage_key).as_deref().unwrap_or("absent")
        );
        println!("next visit:       {next_visit}");
    }

}
