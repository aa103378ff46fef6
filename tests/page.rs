#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlInputElement};

use pagefx_wasm::wasm::{backtop, direction, preview, reveal, tooltip};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        window().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Run animation frames until `done` holds, bounded so a stuck tween fails
/// the assertion that follows instead of hanging the whole run.
async fn settle(mut done: impl FnMut() -> bool) {
    let mut frames = 0;
    while !done() && frames < 600 {
        next_frame().await;
        frames += 1;
    }
}

fn fire(target: &web_sys::EventTarget, event: &str) {
    let event = web_sys::Event::new(event).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn remove_all(selector: &str) {
    let nodes = document().query_selector_all(selector).unwrap();
    for index in 0..nodes.length() {
        if let Some(el) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            el.remove();
        }
    }
}

fn remove_by_id(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.remove();
    }
}

fn computed(el: &web_sys::Element, property: &str) -> String {
    window()
        .get_computed_style(el)
        .unwrap()
        .expect("element has a computed style")
        .get_property_value(property)
        .unwrap()
}

/// A fresh `.update-image` container with its `img`, appended to the body.
fn preview_fixture(document: &Document, hidden: bool) -> (HtmlElement, HtmlImageElement) {
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    container.set_class_name("update-image");
    if hidden {
        container.style().set_property("display", "none").unwrap();
    }
    let img: HtmlImageElement = document.create_element("img").unwrap().dyn_into().unwrap();
    container.append_child(&img).unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    (container, img)
}

#[wasm_bindgen_test]
async fn selected_image_lands_in_the_preview() {
    remove_all(".update-image");
    let doc = document();
    let (container, img) = preview_fixture(&doc, true);

    let reader = web_sys::FileReader::new().unwrap();
    preview::wire_reader(&window(), &reader, &img, &container).unwrap();

    let bag = web_sys::FilePropertyBag::new();
    bag.set_type("image/png");
    let parts = js_sys::Array::of1(&JsValue::from_str("preview-bytes"));
    let file =
        web_sys::File::new_with_str_sequence_and_options(&parts, "avatar.png", &bag).unwrap();
    reader.read_as_data_url(&file).unwrap();

    settle(|| !img.src().is_empty()).await;
    assert_eq!(img.src(), "data:image/png;base64,cHJldmlldy1ieXRlcw==");

    // the finished read also fades the container in
    settle(|| {
        container
            .style()
            .get_property_value("opacity")
            .unwrap()
            .is_empty()
    })
    .await;
    assert_eq!(computed(&container, "display"), "block");
    assert_eq!(computed(&container, "opacity"), "1");

    container.remove();
}

#[wasm_bindgen_test]
async fn failed_read_leaves_the_preview_hidden() {
    remove_all(".update-image");
    let doc = document();
    let (container, img) = preview_fixture(&doc, true);

    let reader = web_sys::FileReader::new().unwrap();
    preview::wire_reader(&window(), &reader, &img, &container).unwrap();

    // a reader error is only reported; the page does not change
    fire(&reader, "error");
    next_frame().await;
    next_frame().await;
    assert_eq!(img.src(), "");
    assert_eq!(computed(&container, "display"), "none");

    // picking again while a read is pending is rejected, and the first
    // read still lands
    let bag = web_sys::FilePropertyBag::new();
    bag.set_type("image/png");
    let first = web_sys::File::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&JsValue::from_str("first")),
        "first.png",
        &bag,
    )
    .unwrap();
    let second = web_sys::File::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&JsValue::from_str("second")),
        "second.png",
        &bag,
    )
    .unwrap();
    reader.read_as_data_url(&first).unwrap();
    assert!(reader.read_as_data_url(&second).is_err());

    settle(|| !img.src().is_empty()).await;
    assert_eq!(img.src(), "data:image/png;base64,Zmlyc3Q=");

    container.remove();
}

#[wasm_bindgen_test]
async fn cancelled_selection_changes_nothing() {
    remove_all(".update-image");
    remove_by_id("id_image");
    remove_by_id("image-clear_id");
    let doc = document();
    let (container, img) = preview_fixture(&doc, true);
    let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    input.set_type("file");
    input.set_id("id_image");
    doc.body().unwrap().append_child(&input).unwrap();

    preview::install(&window(), &doc).unwrap();

    // change fires with an empty selection, exactly like a dismissed picker
    fire(&input, "change");
    next_frame().await;
    next_frame().await;

    assert_eq!(img.src(), "");
    assert_eq!(computed(&container, "display"), "none");

    container.remove();
    input.remove();
}

#[wasm_bindgen_test]
async fn clear_checkbox_hides_and_restores_the_preview() {
    remove_all(".update-image");
    remove_by_id("id_image");
    remove_by_id("image-clear_id");
    let doc = document();
    let (container, _img) = preview_fixture(&doc, false);
    let checkbox: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    checkbox.set_type("checkbox");
    checkbox.set_id("image-clear_id");
    doc.body().unwrap().append_child(&checkbox).unwrap();

    preview::install(&window(), &doc).unwrap();
    assert_eq!(computed(&container, "display"), "block");

    checkbox.click();
    settle(|| computed(&container, "display") == "none").await;
    assert_eq!(computed(&container, "display"), "none");

    checkbox.click();
    settle(|| {
        computed(&container, "display") == "block"
            && container
                .style()
                .get_property_value("opacity")
                .unwrap()
                .is_empty()
    })
    .await;
    assert_eq!(computed(&container, "opacity"), "1");

    // flip again mid-fade; the later fade wins and the box ends visible
    checkbox.click();
    next_frame().await;
    next_frame().await;
    checkbox.click();
    settle(|| {
        computed(&container, "display") == "block"
            && container
                .style()
                .get_property_value("opacity")
                .unwrap()
                .is_empty()
    })
    .await;
    assert_eq!(computed(&container, "opacity"), "1");

    container.remove();
    checkbox.remove();
}

#[wasm_bindgen_test]
fn tooltip_title_moves_and_hover_opens_one_bubble() {
    remove_all("[data-toggle=\"tooltip\"]");
    remove_all(".tooltip");
    let doc = document();
    let body = doc.body().unwrap();

    let span: HtmlElement = doc.create_element("span").unwrap().dyn_into().unwrap();
    span.set_attribute("data-toggle", "tooltip").unwrap();
    span.set_attribute("title", "Saved for later").unwrap();
    span.set_text_content(Some("bookmark"));
    body.append_child(&span).unwrap();

    // a marker without a title gets no tooltip at all
    let silent: HtmlElement = doc.create_element("span").unwrap().dyn_into().unwrap();
    silent.set_attribute("data-toggle", "tooltip").unwrap();
    body.append_child(&silent).unwrap();

    tooltip::install(&window(), &doc).unwrap();

    assert!(span.get_attribute("title").is_none());
    assert_eq!(
        span.get_attribute("data-original-title").as_deref(),
        Some("Saved for later")
    );
    assert!(silent.get_attribute("data-original-title").is_none());

    fire(&span, "mouseenter");
    let bubbles = doc.query_selector_all(".tooltip").unwrap();
    assert_eq!(bubbles.length(), 1);
    let bubble: HtmlElement = bubbles.item(0).unwrap().dyn_into().unwrap();
    assert_eq!(bubble.text_content().as_deref(), Some("Saved for later"));

    // entering again while open must not stack a second bubble
    fire(&span, "mouseenter");
    assert_eq!(doc.query_selector_all(".tooltip").unwrap().length(), 1);

    fire(&span, "mouseleave");
    assert_eq!(doc.query_selector_all(".tooltip").unwrap().length(), 0);

    // keyboard focus drives the same open/close path
    fire(&span, "focus");
    assert_eq!(doc.query_selector_all(".tooltip").unwrap().length(), 1);
    fire(&span, "blur");
    assert_eq!(doc.query_selector_all(".tooltip").unwrap().length(), 0);

    fire(&silent, "mouseenter");
    assert_eq!(doc.query_selector_all(".tooltip").unwrap().length(), 0);

    span.remove();
    silent.remove();
}

#[wasm_bindgen_test]
fn installs_tolerate_a_page_without_the_widgets() {
    remove_all(".update-image");
    remove_all("[data-toggle=\"tooltip\"]");
    remove_all(".animation-element");
    remove_by_id("id_image");
    remove_by_id("image-clear_id");
    remove_by_id("goToTop");

    let win = window();
    let doc = document();
    assert!(preview::install(&win, &doc).is_ok());
    assert!(backtop::install(&win, &doc).is_ok());
    assert!(tooltip::install(&win, &doc).is_ok());
    assert!(reveal::install(&win, &doc).is_ok());
    assert!(direction::install(&win, &doc).is_ok());
}
