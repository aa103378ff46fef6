//! Tooltips for elements flagged with `data-toggle="tooltip"`.
//!
//! At install each flagged element's `title` moves to `data-original-title`
//! (which also suppresses the browser's own tooltip); hovering or focusing
//! the element shows a positioned bubble appended to `<body>`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::dom;

const MARKER_SELECTOR: &str = "[data-toggle=\"tooltip\"]";
const TITLE_STORE_ATTR: &str = "data-original-title";
const BUBBLE_CLASS: &str = "tooltip";
const GAP_PX: f64 = 6.0;

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(MARKER_SELECTOR)?;
    if nodes.length() == 0 {
        dom::skipped("tooltips", MARKER_SELECTOR);
        return Ok(());
    }
    for index in 0..nodes.length() {
        let Some(el) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        activate(window, document, &el)?;
    }
    Ok(())
}

fn activate(window: &Window, document: &Document, el: &HtmlElement) -> Result<(), JsValue> {
    let text = el.get_attribute("title").unwrap_or_default();
    if text.is_empty() {
        return Ok(());
    }
    el.set_attribute(TITLE_STORE_ATTR, &text)?;
    el.remove_attribute("title")?;

    // At most one open bubble per element, shared by the four listeners.
    let bubble: Rc<RefCell<Option<HtmlElement>>> = Rc::new(RefCell::new(None));

    for event in ["mouseenter", "focus"] {
        let show = {
            let window = window.clone();
            let document = document.clone();
            let el = el.clone();
            let bubble = bubble.clone();
            Closure::wrap(Box::new(move || {
                if bubble.borrow().is_some() {
                    return;
                }
                match open_bubble(&window, &document, &el) {
                    Ok(tip) => *bubble.borrow_mut() = Some(tip),
                    Err(err) => dom::report("showing tooltip", &err),
                }
            }) as Box<dyn FnMut()>)
        };
        dom::on(el, event, show)?;
    }

    for event in ["mouseleave", "blur"] {
        let hide = {
            let bubble = bubble.clone();
            Closure::wrap(Box::new(move || {
                if let Some(tip) = bubble.borrow_mut().take() {
                    tip.remove();
                }
            }) as Box<dyn FnMut()>)
        };
        dom::on(el, event, hide)?;
    }

    Ok(())
}

/// Create the bubble, mount it on `<body>`, and centre it above the element.
fn open_bubble(
    window: &Window,
    document: &Document,
    el: &HtmlElement,
) -> Result<HtmlElement, JsValue> {
    let text = el.get_attribute(TITLE_STORE_ATTR).unwrap_or_default();
    let tip: HtmlElement = document.create_element("div")?.dyn_into()?;
    tip.set_class_name(BUBBLE_CLASS);
    tip.set_text_content(Some(&text));
    document.body().ok_or("no body")?.append_child(&tip)?;

    // Document-relative placement; the bubble is measured after mounting.
    let rect = el.get_bounding_client_rect();
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = rect.top() + scroll_y - f64::from(tip.offset_height()) - GAP_PX;
    let left = rect.left() + scroll_x + rect.width() / 2.0 - f64::from(tip.offset_width()) / 2.0;
    let style = tip.style();
    style.set_property("top", &format!("{top:.1}px"))?;
    style.set_property("left", &format!("{left:.1}px"))?;
    Ok(tip)
}
