//! Theme preference controller — resolves, applies and toggles the theme.

use std::rc::Rc;

use themepref_domain::marker::{self, ThemeMarker};
use themepref_domain::preference;
use themepref_domain::theme::Theme;

use crate::config::ThemeConfig;
use crate::ports::{ColorSchemeProbe, DocumentHandle, PreferenceStore, ToggleControl};

struct Inner<S, D, P> {
    config: ThemeConfig,
    store: S,
    document: D,
    probe: P,
}

/// Keeps the document's theme marker and the persisted preference in sync.
///
/// Cloning is cheap and yields a handle to the same collaborators, which is
/// how the click handler reaches the controller.
pub struct ThemePreferenceController<S, D, P> {
    inner: Rc<Inner<S, D, P>>,
}

impl<S, D, P> Clone for ThemePreferenceController<S, D, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, D, P> ThemePreferenceController<S, D, P>
where
    S: PreferenceStore,
    D: DocumentHandle,
    P: ColorSchemeProbe,
{
    /// Create a controller over the given collaborators.
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, document: D, probe: P) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                store,
                document,
                probe,
            }),
        }
    }

    /// Resolve the initial theme and apply it to the document.
    ///
    /// Stored choice wins, then the OS dark preference; otherwise the
    /// attribute is left untouched. The OS preference is only queried when
    /// there is no stored choice. Nothing is written to the store.
    pub fn initialize(&self) -> ThemeMarker {
        let inner = &*self.inner;
        let stored = self.stored_choice();
        let prefers_dark = stored.is_none() && inner.probe.prefers_dark();
        let resolved = marker::resolve(stored, prefers_dark);

        if let Some(value) = resolved.attribute_value() {
            if let Err(err) = inner
                .document
                .set_root_attribute(&inner.config.attribute, value)
            {
                tracing::warn!(error = %err, marker = %resolved, "failed to apply theme");
            }
        }

        tracing::debug!(
            stored = ?stored,
            prefers_dark,
            marker = %resolved,
            "theme initialized"
        );
        resolved
    }

    /// The marker currently on the document.
    #[must_use]
    pub fn current(&self) -> ThemeMarker {
        let inner = &*self.inner;
        let value = inner.document.root_attribute(&inner.config.attribute);
        ThemeMarker::from_attribute(value.as_deref())
    }

    /// Flip the theme and persist the new choice.
    ///
    /// Anything other than a `dark` marker (unset included) goes to dark,
    /// `dark` goes to light. The choice is only persisted once the document
    /// shows it; returns `None` when the attribute could not be set.
    pub fn toggle(&self) -> Option<Theme> {
        let inner = &*self.inner;
        let from = self.current();
        let next = from.next_on_click();

        if let Err(err) = inner
            .document
            .set_root_attribute(&inner.config.attribute, next.as_str())
        {
            tracing::warn!(error = %err, theme = %next, "failed to apply theme");
            return None;
        }
        if let Err(err) = inner
            .store
            .set(&inner.config.storage_key, preference::serialize(next))
        {
            tracing::warn!(error = %err, theme = %next, "failed to persist theme");
        }

        tracing::info!(%from, to = %next, "theme toggled");
        Some(next)
    }

    fn stored_choice(&self) -> Option<Theme> {
        let key = &self.inner.config.storage_key;
        match self.inner.store.get(key) {
            Ok(raw) => {
                let parsed = preference::parse(raw.as_deref());
                if parsed.is_none() {
                    if let Some(raw) = raw {
                        tracing::debug!(
                            key = %key,
                            value = %raw,
                            "ignoring unrecognized stored theme"
                        );
                    }
                }
                parsed
            }
            Err(err) => {
                tracing::warn!(error = %err, key = %key, "failed to read stored theme");
                None
            }
        }
    }
}

impl<S, D, P> ThemePreferenceController<S, D, P>
where
    S: PreferenceStore + 'static,
    D: DocumentHandle + 'static,
    P: ColorSchemeProbe + 'static,
{
    /// Attach [`toggle`](Self::toggle) to the toggle control's clicks.
    ///
    /// Returns `false` without touching anything when the page has no such
    /// control, or when the listener cannot be attached.
    ///
    /// The handler owns a controller handle, so the controller lives as long
    /// as the control keeps its listeners, even after every other handle is
    /// dropped. A document that owns its controls therefore forms a cycle
    /// with the controller until the control is removed.
    pub fn bind_toggle(&self) -> bool {
        let id = &self.inner.config.toggle_id;
        let Some(control) = self.inner.document.find_control(id) else {
            tracing::debug!(id = %id, "no theme toggle on page");
            return false;
        };

        let controller = self.clone();
        match control.on_click(Box::new(move || {
            controller.toggle();
        })) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, id = %id, "failed to bind theme toggle");
                false
            }
        }
    }
}
