//! Fixed "back to top" control: appears once the page is scrolled past a
//! full viewport, and animates the scroll offset back to zero on click.

use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::{animate, dom};

const BUTTON_ID: &str = "goToTop";

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(button) = dom::by_id::<HtmlElement>(document, BUTTON_ID) else {
        dom::skipped("back-to-top", BUTTON_ID);
        return Ok(());
    };

    // The page may load restored to a mid-scroll position; evaluate the rule
    // once up front, not only on the first scroll event.
    apply_visibility(window, &button);

    let onscroll = {
        let win = window.clone();
        let button = button.clone();
        Closure::wrap(Box::new(move || apply_visibility(&win, &button)) as Box<dyn FnMut()>)
    };
    dom::on(window, "scroll", onscroll)?;

    let onclick = {
        let win = window.clone();
        Closure::wrap(Box::new(move || {
            animate::scroll_to_top(&win, animate::SCROLL_TO_TOP_MS);
        }) as Box<dyn FnMut()>)
    };
    dom::on(&button, "click", onclick)
}

/// Visible (`opacity: 1`) iff the scroll offset exceeds one viewport height.
fn apply_visibility(window: &Window, button: &HtmlElement) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let opacity = if offset > viewport_height { "1" } else { "0" };
    let _ = button.style().set_property("opacity", opacity);
}
