use recallo_core::{Px, Viewport};
use wasm_bindgen::JsValue;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Current inner size of the browser window.
pub(crate) fn viewport() -> Viewport {
    let window = gloo::utils::window();
    match (
        to_px(window.inner_width()),
        to_px(window.inner_height()),
    ) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => {
            log::warn!("could not read the window size, using the default viewport");
            Viewport::default()
        }
    }
}

fn to_px(value: Result<JsValue, JsValue>) -> Option<Px> {
    value.ok()?.as_f64().map(|px| px as Px)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn viewport_reads_window_size() {
        let viewport = viewport();
        assert!(viewport.width > 0);
        assert!(viewport.height > 0);
    }
}
