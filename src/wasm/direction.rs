//! Scroll-direction tracking: every scroll event is classified against the
//! previous offset and handed to a subscriber.

use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::{Document, Window};

use super::dom;
use crate::viewport::ScrollDirection;

const DIRECTION_ATTR: &str = "data-scroll-direction";

/// Install the page's default subscriber: mirror the direction onto the
/// document element so stylesheets can react to it.
pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(root) = document.document_element() else {
        dom::skipped("scroll direction", "document element");
        return Ok(());
    };
    watch(window, move |direction| {
        let _ = root.set_attribute(DIRECTION_ATTR, direction.as_str());
    })
}

/// Subscribe `on_change` to scroll-direction changes. The previous offset
/// lives in the handler's environment and is updated on every event, whether
/// or not the event produced a direction.
pub fn watch(
    window: &Window,
    mut on_change: impl FnMut(ScrollDirection) + 'static,
) -> Result<(), JsValue> {
    let win = window.clone();
    let mut previous = win.scroll_y().unwrap_or(0.0);
    let onscroll = Closure::wrap(Box::new(move || {
        let current = win.scroll_y().unwrap_or(0.0);
        if let Some(direction) = ScrollDirection::between(previous, current) {
            on_change(direction);
        }
        previous = current;
    }) as Box<dyn FnMut()>);
    dom::on(window, "scroll", onscroll)
}
