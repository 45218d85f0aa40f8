//! Run code once the document structure is parsed.

use themepref_domain::error::DocumentError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::describe;

/// Run `f` once the DOM is ready.
///
/// Runs immediately when the document has already been parsed (the module
/// was loaded with `defer`/`async` or after the fact), otherwise once on
/// `DOMContentLoaded`.
///
/// # Errors
///
/// Returns [`DocumentError::Listener`] if the `DOMContentLoaded` listener
/// cannot be attached.
pub fn on_dom_ready<F>(f: F) -> Result<(), DocumentError>
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        tracing::debug!("no document, skipping DOM-ready hook");
        return Ok(());
    };

    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let on_ready =
        Closure::<dyn FnMut(web_sys::Event)>::once(move |_: web_sys::Event| f());
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| DocumentError::Listener {
            event: "DOMContentLoaded",
            reason: describe(&err),
        })?;
    on_ready.forget();
    Ok(())
}
