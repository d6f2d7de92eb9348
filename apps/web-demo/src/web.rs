use crate::{carousel_config, CAROUSEL_SELECTORS};
use glidescroll_platform_web::{SliderHandle, WebPlatform};
use wasm_bindgen::prelude::*;

/// The mounted carousels. Calling `free()` from JS detaches all of them.
#[wasm_bindgen]
pub struct Carousels {
    handles: Vec<SliderHandle>,
    _platform: WebPlatform,
}

#[wasm_bindgen]
impl Carousels {
    /// Number of rows that were found and attached.
    pub fn attached(&self) -> usize {
        self.handles.len()
    }
}

#[wasm_bindgen]
pub fn mount_carousels() -> Result<Carousels, JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let platform = WebPlatform::new()?;
    let handles = platform.attach_all(&CAROUSEL_SELECTORS, &carousel_config());
    log::info!("{} carousel(s) mounted", handles.len());

    Ok(Carousels {
        handles,
        _platform: platform,
    })
}
