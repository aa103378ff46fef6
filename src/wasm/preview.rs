//! Image preview for the post form: the chosen file is read into a data URL
//! and shown in the preview container; the clear checkbox hides it again.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, FileReader, HtmlElement, HtmlImageElement, HtmlInputElement, Window};

use super::{animate, dom};

const FILE_INPUT_ID: &str = "id_image";
const CLEAR_CHECKBOX_ID: &str = "image-clear_id";
const CONTAINER_SELECTOR: &str = ".update-image";
const IMAGE_SELECTOR: &str = ".update-image img";

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(container) = dom::query::<HtmlElement>(document, CONTAINER_SELECTOR) else {
        dom::skipped("image preview", CONTAINER_SELECTOR);
        return Ok(());
    };
    let Some(img) = dom::query::<HtmlImageElement>(document, IMAGE_SELECTOR) else {
        dom::skipped("image preview", IMAGE_SELECTOR);
        return Ok(());
    };

    match dom::by_id::<HtmlInputElement>(document, FILE_INPUT_ID) {
        Some(input) => install_file_listener(window, &input, &img, &container)?,
        None => dom::skipped("image preview", FILE_INPUT_ID),
    }

    match dom::by_id::<HtmlInputElement>(document, CLEAR_CHECKBOX_ID) {
        Some(checkbox) => install_clear_listener(window, &checkbox, &container)?,
        None => dom::skipped("preview toggle", CLEAR_CHECKBOX_ID),
    }

    Ok(())
}

/// Point the reader's completion at the preview: a successful read puts the
/// data URL into `img` and fades the container in; a failed read is reported
/// and the container stays as it was.
pub fn wire_reader(
    window: &Window,
    reader: &FileReader,
    img: &HtmlImageElement,
    container: &HtmlElement,
) -> Result<(), JsValue> {
    let onload = {
        let window = window.clone();
        let reader = reader.clone();
        let img = img.clone();
        let container = container.clone();
        Closure::wrap(Box::new(move || match reader.result() {
            Ok(value) => {
                if let Some(url) = value.as_string() {
                    img.set_src(&url);
                    animate::fade_in(&window, &container, animate::FADE_MS);
                }
            }
            Err(err) => dom::report("reading selected image", &err),
        }) as Box<dyn FnMut()>)
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = {
        let reader = reader.clone();
        Closure::wrap(Box::new(move || {
            let err = reader
                .error()
                .map(JsValue::from)
                .unwrap_or_else(|| JsValue::from_str("file could not be read"));
            dom::report("reading selected image", &err);
        }) as Box<dyn FnMut()>)
    };
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    Ok(())
}

fn install_file_listener(
    window: &Window,
    input: &HtmlInputElement,
    img: &HtmlImageElement,
    container: &HtmlElement,
) -> Result<(), JsValue> {
    // One reader for the page, armed once; each selection re-uses it, like
    // the page always has.
    let reader = FileReader::new()?;
    wire_reader(window, &reader, img, container)?;

    let onchange = {
        let input = input.clone();
        Closure::wrap(Box::new(move || {
            // A cancelled picker leaves the selection empty; nothing to do.
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                return;
            };
            if let Err(err) = reader.read_as_data_url(&file) {
                dom::report("starting image read", &err);
            }
        }) as Box<dyn FnMut()>)
    };
    dom::on(input, "change", onchange)
}

fn install_clear_listener(
    window: &Window,
    checkbox: &HtmlInputElement,
    container: &HtmlElement,
) -> Result<(), JsValue> {
    let onclick = {
        let window = window.clone();
        let checkbox = checkbox.clone();
        let container = container.clone();
        Closure::wrap(Box::new(move || {
            if checkbox.checked() {
                animate::fade_out(&window, &container, animate::FADE_MS);
            } else {
                animate::fade_in(&window, &container, animate::FADE_MS);
            }
        }) as Box<dyn FnMut()>)
    };
    dom::on(checkbox, "click", onclick)
}
