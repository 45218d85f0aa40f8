//! DOM document and toggle element.

use themepref_app::ports::{ClickHandler, DocumentHandle, ToggleControl};
use themepref_domain::error::DocumentError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use crate::describe;

/// An element whose clicks toggle the theme.
#[derive(Clone)]
pub struct DomToggle {
    element: Element,
}

impl DomToggle {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ToggleControl for DomToggle {
    fn on_click(&self, handler: ClickHandler) -> Result<(), DocumentError> {
        let mut handler = handler;
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            handler();
        });
        self.element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| DocumentError::Listener {
                event: "click",
                reason: describe(&err),
            })?;
        // The listener lives as long as the page.
        on_click.forget();
        Ok(())
    }
}

/// The page's `document`.
#[derive(Clone)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// Document of the current window, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }

    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn root(&self) -> Result<Element, DocumentError> {
        self.document
            .document_element()
            .ok_or(DocumentError::MissingRoot)
    }
}

impl DocumentHandle for DomDocument {
    type Control = DomToggle;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root().ok()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), DocumentError> {
        self.root()?
            .set_attribute(name, value)
            .map_err(|err| DocumentError::Attribute {
                name: name.to_string(),
                reason: describe(&err),
            })
    }

    fn find_control(&self, id: &str) -> Option<DomToggle> {
        self.document.get_element_by_id(id).map(DomToggle::new)
    }
}
