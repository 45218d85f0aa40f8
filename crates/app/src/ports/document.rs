//! Document port — the root element's attributes and clickable controls.

use std::rc::Rc;

use themepref_domain::error::DocumentError;

/// Callback invoked on every click of a control.
pub type ClickHandler = Box<dyn FnMut()>;

/// A control that can report clicks.
pub trait ToggleControl {
    /// Register `handler` to run on each click for the lifetime of the page.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Listener`] if the listener cannot be attached.
    fn on_click(&self, handler: ClickHandler) -> Result<(), DocumentError>;
}

/// The page's document.
pub trait DocumentHandle {
    /// Control type returned by [`find_control`](Self::find_control).
    type Control: ToggleControl;

    /// Current value of attribute `name` on the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Set attribute `name` on the root element.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] when there is no root element or it
    /// rejects the attribute.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), DocumentError>;

    /// Look up a control by element id.
    fn find_control(&self, id: &str) -> Option<Self::Control>;
}

impl<T: DocumentHandle + ?Sized> DocumentHandle for Rc<T> {
    type Control = T::Control;

    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), DocumentError> {
        (**self).set_root_attribute(name, value)
    }

    fn find_control(&self, id: &str) -> Option<Self::Control> {
        (**self).find_control(id)
    }
}

impl<T: DocumentHandle + ?Sized> DocumentHandle for &T {
    type Control = T::Control;

    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), DocumentError> {
        (**self).set_root_attribute(name, value)
    }

    fn find_control(&self, id: &str) -> Option<Self::Control> {
        (**self).find_control(id)
    }
}
