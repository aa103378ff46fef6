//! Adds the `fly-in` class to animation elements the first time they enter
//! the viewport. Evaluated once at load and on every scroll or resize.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::dom;
use crate::viewport::Span;

const TARGET_SELECTOR: &str = ".animation-element";
const IN_VIEW_CLASS: &str = "fly-in";

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    // The set of animation elements is fixed at load; the page does not add
    // them dynamically.
    let nodes = document.query_selector_all(TARGET_SELECTOR)?;
    let mut targets = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(el) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            targets.push(el);
        }
    }
    if targets.is_empty() {
        dom::skipped("reveal animation", TARGET_SELECTOR);
        return Ok(());
    }

    // Elements already on screen animate immediately.
    mark_visible(window, &targets);

    dom::on(window, "scroll", watcher(window, targets.clone()))?;
    dom::on(window, "resize", watcher(window, targets))
}

fn watcher(window: &Window, targets: Vec<Element>) -> Closure<dyn FnMut()> {
    let win = window.clone();
    Closure::wrap(Box::new(move || mark_visible(&win, &targets)) as Box<dyn FnMut()>)
}

/// Tag every target whose extent overlaps the viewport. The class is never
/// taken back off.
fn mark_visible(window: &Window, targets: &[Element]) {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let viewport = Span::from_top_and_height(scroll_top, viewport_height);

    for el in targets {
        let rect = el.get_bounding_client_rect();
        let extent = Span::from_top_and_height(rect.top() + scroll_top, rect.height());
        if extent.overlaps(&viewport) {
            let _ = el.class_list().add_1(IN_VIEW_CLASS);
        }
    }
}
