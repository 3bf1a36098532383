//! Bindings to the OpenSeadragon deep-zoom viewer the page embeds.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Viewer instance created by the page script and handed to `viewer_ready`.
    #[derive(Clone, Debug)]
    pub type Viewer;

    /// Overlay descriptors passed to the viewer constructor.
    #[wasm_bindgen(method, getter)]
    pub fn overlays(this: &Viewer) -> js_sys::Array;

    #[wasm_bindgen(method, catch, js_name = addOverlay)]
    pub fn add_overlay(
        this: &Viewer,
        element: &Element,
        location: &Rect,
        placement: &JsValue,
    ) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen(js_namespace = OpenSeadragon)]
extern "C" {
    pub type Rect;

    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect;

    #[wasm_bindgen(catch, js_name = setElementOpacity)]
    pub fn set_element_opacity(element: &str, opacity: f64, uses_alpha: bool)
    -> Result<(), JsValue>;
}

impl Viewer {
    /// Ids of all overlay descriptors, in viewer order. Descriptors without an
    /// id are skipped.
    pub fn overlay_ids(&self) -> Vec<String> {
        self.overlays()
            .iter()
            .filter_map(|o| js_sys::Reflect::get(&o, &JsValue::from_str("id")).ok())
            .filter_map(|id| id.as_string())
            .collect()
    }
}

/// `OpenSeadragon.Placement.TOP_LEFT`, or undefined (the viewer default) when
/// the namespace is not loaded.
pub fn top_left_placement() -> JsValue {
    let lookup = || -> Option<JsValue> {
        let osd = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("OpenSeadragon")).ok()?;
        let placement = js_sys::Reflect::get(&osd, &JsValue::from_str("Placement")).ok()?;
        js_sys::Reflect::get(&placement, &JsValue::from_str("TOP_LEFT")).ok()
    };
    lookup().unwrap_or(JsValue::UNDEFINED)
}

/// Set the opacity of every viewer overlay `filter` accepts. Failures are
/// logged per overlay.
pub fn set_overlay_opacity<F>(viewer: &Viewer, opacity: f64, filter: F)
where
    F: Fn(&str) -> bool,
{
    for id in viewer.overlay_ids() {
        if !filter(&id) {
            continue;
        }
        if let Err(e) = set_element_opacity(&id, opacity, false) {
            log::warn!("setElementOpacity failed for {}: {:?}", id, e);
        }
    }
}
