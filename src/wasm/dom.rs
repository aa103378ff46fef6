//! Thin helpers over the host document: element lookup, listener
//! attachment, console notes.

use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, EventTarget};

/// Attach `closure` to `event` on `target` for the life of the page.
pub(crate) fn on(
    target: &EventTarget,
    event: &str,
    closure: Closure<dyn FnMut()>,
) -> Result<(), JsValue> {
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<Function>())?;
    closure.forget();
    Ok(())
}

pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub(crate) fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Console note for a behavior whose elements are not on this page. Several
/// templates ship without some widgets; that is not an error.
pub(crate) fn skipped(behavior: &str, selector: &str) {
    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "pagefx: {behavior}: {selector} not present, skipping"
    )));
}

pub(crate) fn report(context: &str, err: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(&format!("pagefx: {context}")), err);
}
