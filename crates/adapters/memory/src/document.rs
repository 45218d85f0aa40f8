//! Simulated document: root element attributes and clickable controls.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use themepref_app::ports::{ClickHandler, DocumentHandle, ToggleControl};
use themepref_domain::error::DocumentError;

/// A button that runs its click handlers when [`click`](Self::click) is called.
///
/// Clones share the same handler list, like two references to one element.
#[derive(Clone, Default)]
pub struct MemoryToggle {
    handlers: Rc<RefCell<Vec<ClickHandler>>>,
}

impl MemoryToggle {
    /// Simulate a user click. Returns the number of handlers that ran.
    ///
    /// Handlers registered while the click is being delivered only run on
    /// the next click.
    pub fn click(&self) -> usize {
        let mut running = std::mem::take(&mut *self.handlers.borrow_mut());
        for handler in &mut running {
            handler();
        }
        let count = running.len();
        let mut handlers = self.handlers.borrow_mut();
        running.append(&mut handlers);
        *handlers = running;
        count
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl std::fmt::Debug for MemoryToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryToggle")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl ToggleControl for MemoryToggle {
    fn on_click(&self, handler: ClickHandler) -> Result<(), DocumentError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

/// Document with a root element and controls addressable by id.
///
/// The document owns its controls, and a bound control's handlers usually
/// own a handle to a controller that owns this document: call
/// [`remove_control`](Self::remove_control) when a simulated page is done so
/// the whole page can be freed.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    root: RefCell<HashMap<String, String>>,
    controls: RefCell<HashMap<String, MemoryToggle>>,
    fail_writes: Cell<bool>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control with element id `id` and return a handle to it.
    pub fn add_control(&self, id: &str) -> MemoryToggle {
        let toggle = MemoryToggle::default();
        self.controls
            .borrow_mut()
            .insert(id.to_string(), toggle.clone());
        toggle
    }

    /// Detach the control `id`, dropping its handlers once no other handle
    /// to it remains.
    pub fn remove_control(&self, id: &str) -> Option<MemoryToggle> {
        self.controls.borrow_mut().remove(id)
    }

    pub fn remove_root_attribute(&self, name: &str) {
        self.root.borrow_mut().remove(name);
    }

    /// Make subsequent attribute writes fail with [`DocumentError::Attribute`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl DocumentHandle for MemoryDocument {
    type Control = MemoryToggle;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), DocumentError> {
        if self.fail_writes.get() {
            return Err(DocumentError::Attribute {
                name: name.to_string(),
                reason: "simulated write failure".to_string(),
            });
        }
        self.root
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn find_control(&self, id: &str) -> Option<MemoryToggle> {
        self.controls.borrow().get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_store_root_attributes() {
        let doc = MemoryDocument::new();
        assert_eq!(doc.root_attribute("data-theme"), None);
        doc.set_root_attribute("data-theme", "dark").unwrap();
        assert_eq!(doc.root_attribute("data-theme").as_deref(), Some("dark"));
        doc.remove_root_attribute("data-theme");
        assert_eq!(doc.root_attribute("data-theme"), None);
    }

    #[test]
    fn should_reject_attribute_writes_when_failing() {
        let doc = MemoryDocument::new();
        doc.set_root_attribute("data-theme", "light").unwrap();
        doc.fail_writes(true);
        assert!(matches!(
            doc.set_root_attribute("data-theme", "dark"),
            Err(DocumentError::Attribute { .. })
        ));
        assert_eq!(doc.root_attribute("data-theme").as_deref(), Some("light"));
    }

    #[test]
    fn should_release_handlers_when_control_removed() {
        let doc = MemoryDocument::new();
        doc.add_control("theme-toggle");
        let owned = Rc::new(());
        let captured = Rc::clone(&owned);
        doc.find_control("theme-toggle")
            .unwrap()
            .on_click(Box::new(move || {
                let _ = &captured;
            }))
            .unwrap();
        assert_eq!(Rc::strong_count(&owned), 2);

        drop(doc.remove_control("theme-toggle"));

        assert_eq!(Rc::strong_count(&owned), 1);
        assert!(doc.find_control("theme-toggle").is_none());
    }

    #[test]
    fn should_find_registered_control_only() {
        let doc = MemoryDocument::new();
        doc.add_control("theme-toggle");
        assert!(doc.find_control("theme-toggle").is_some());
        assert!(doc.find_control("other").is_none());
    }

    #[test]
    fn should_share_handlers_between_clones() {
        let doc = MemoryDocument::new();
        let toggle = doc.add_control("theme-toggle");
        let clicks = Rc::new(Cell::new(0));

        let counter = Rc::clone(&clicks);
        doc.find_control("theme-toggle")
            .unwrap()
            .on_click(Box::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        assert_eq!(toggle.click(), 1);
        assert_eq!(toggle.click(), 1);
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn should_run_nothing_when_unbound() {
        let toggle = MemoryToggle::default();
        assert_eq!(toggle.click(), 0);
    }

    #[test]
    fn should_defer_handlers_added_during_click() {
        let toggle = MemoryToggle::default();
        let inner = toggle.clone();
        toggle
            .on_click(Box::new(move || {
                let _ = inner.on_click(Box::new(|| {}));
            }))
            .unwrap();

        assert_eq!(toggle.click(), 1);
        assert_eq!(toggle.handler_count(), 2);
    }
}
