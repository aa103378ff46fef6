// Only compile wasm-specific code when targeting wasm32; the scroll/overlap
// arithmetic is plain Rust and stays testable on the host.

pub mod easing;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod dom;

    pub mod animate;
    pub mod backtop;
    pub mod direction;
    pub mod preview;
    pub mod reveal;
    pub mod tooltip;

    /// Wire every page behavior once the module loads. Behaviors whose
    /// elements are not on the current page install as no-ops.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        preview::install(&window, &document)?;
        backtop::install(&window, &document)?;
        tooltip::install(&window, &document)?;
        direction::install(&window, &document)?;
        reveal::install(&window, &document)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
