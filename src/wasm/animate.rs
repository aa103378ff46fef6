//! Frame-driven tweens: fades for the preview container and the animated
//! scroll back to the top of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlElement, Window};

use crate::easing::swing;

pub(crate) const FADE_MS: f64 = 400.0;
pub(crate) const SCROLL_TO_TOP_MS: f64 = 1000.0;

/// Attribute stamped on an element when a fade starts; a newer fade bumps it
/// and any older tween on the element halts at its next frame.
const GENERATION_ATTR: &str = "data-fx-gen";

/// Fade an element in over `duration_ms` and leave it shown (inline
/// `display: block`, stylesheet opacity). Fully visible elements are left
/// alone.
pub fn fade_in(window: &Window, el: &HtmlElement, duration_ms: f64) {
    let stamp = bump_generation(el);
    let start = if is_hidden(window, el) {
        let style = el.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("display", "block");
        0.0
    } else {
        let from = current_opacity(window, el);
        if from >= 1.0 {
            return;
        }
        from
    };

    let el = el.clone();
    let watched = el.clone();
    drive(
        window,
        duration_ms,
        move || generation_matches(&watched, &stamp),
        move |p| {
            let style = el.style();
            if p >= 1.0 {
                let _ = style.remove_property("opacity");
            } else {
                let value = start + (1.0 - start) * p;
                let _ = style.set_property("opacity", &format!("{value:.4}"));
            }
        },
    );
}

/// Fade an element out over `duration_ms` and leave it hidden (inline
/// `display: none`). Hidden elements are left alone.
pub fn fade_out(window: &Window, el: &HtmlElement, duration_ms: f64) {
    let stamp = bump_generation(el);
    if is_hidden(window, el) {
        return;
    }
    let start = current_opacity(window, el);

    let el = el.clone();
    let watched = el.clone();
    drive(
        window,
        duration_ms,
        move || generation_matches(&watched, &stamp),
        move |p| {
            let style = el.style();
            if p >= 1.0 {
                let _ = style.set_property("display", "none");
                let _ = style.remove_property("opacity");
            } else {
                let value = start * (1.0 - p);
                let _ = style.set_property("opacity", &format!("{value:.4}"));
            }
        },
    );
}

/// Animate the window's scroll offset back to zero over `duration_ms`,
/// keeping the horizontal offset where it was.
pub fn scroll_to_top(window: &Window, duration_ms: f64) {
    let from_y = window.scroll_y().unwrap_or(0.0);
    if from_y <= 0.0 {
        return;
    }
    let from_x = window.scroll_x().unwrap_or(0.0);
    let win = window.clone();
    drive(
        window,
        duration_ms,
        || true,
        move |p| {
            win.scroll_to_with_x_and_y(from_x, from_y * (1.0 - p));
        },
    );
}

/// Run `step` once per animation frame for `duration_ms`, feeding it eased
/// progress in `[0, 1]`; the final frame is pinned to exactly 1. `keep_going`
/// is polled first each frame so a superseded tween stops early.
fn drive(
    window: &Window,
    duration_ms: f64,
    mut keep_going: impl FnMut() -> bool + 'static,
    mut step: impl FnMut(f64) + 'static,
) {
    // The closure re-schedules itself, so it holds a handle to its own slot;
    // taking the slot ends the loop and releases the closure.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    let mut started_at: Option<f64> = None;
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if !keep_going() {
            f.borrow_mut().take();
            return;
        }
        let start = *started_at.get_or_insert(now);
        let raw = if duration_ms > 0.0 {
            ((now - start) / duration_ms).min(1.0)
        } else {
            1.0
        };
        step(swing(raw));
        if raw < 1.0 {
            let _ = win
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        } else {
            f.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let _ = window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

fn bump_generation(el: &HtmlElement) -> String {
    let next = el
        .get_attribute(GENERATION_ATTR)
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(1, |v| v.wrapping_add(1));
    let stamp = next.to_string();
    let _ = el.set_attribute(GENERATION_ATTR, &stamp);
    stamp
}

fn generation_matches(el: &HtmlElement, stamp: &str) -> bool {
    el.get_attribute(GENERATION_ATTR).as_deref() == Some(stamp)
}

fn computed(window: &Window, el: &HtmlElement, property: &str) -> Option<String> {
    window
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value(property).ok())
}

fn is_hidden(window: &Window, el: &HtmlElement) -> bool {
    computed(window, el, "display").as_deref() == Some("none")
}

fn current_opacity(window: &Window, el: &HtmlElement) -> f64 {
    computed(window, el, "opacity")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1.0)
}
