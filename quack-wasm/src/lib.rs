use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use quack_core::classes::without_class;
use quack_core::toggles::is_mask_overlay;
use quack_core::{Linker, OverlayGroups, PageData, SetupQueue, Toggle, short_id};

mod boxes;
mod constants;
mod gallery;
mod page;
mod state;
mod toggles;
mod utils;
mod viewer;

use constants::{PAGE_DATA_GLOBAL, PAGE_DATA_ID, PASSIVE_CLASS};
use page::DomPage;
use state::{STATE, State, with_state};
use utils::{elements_by_class, html_elements, init_logging, log_level_from_query, window_string};
use viewer::Viewer;

/// Overlay groups and mask URLs, from `window.__QUACK_DATA` or the
/// `#quack-data` JSON script. Missing or broken data leaves the page without
/// group links.
fn load_page_data(window: &Window, document: &Document) -> PageData {
    let text = window_string(window, PAGE_DATA_GLOBAL).or_else(|| {
        document
            .get_element_by_id(PAGE_DATA_ID)
            .and_then(|el| el.text_content())
    });
    let Some(text) = text else {
        log::info!("no page data found, overlay groups disabled");
        return PageData::default();
    };
    match PageData::from_json(&text) {
        Ok(data) => data,
        Err(e) => {
            log::error!("{}", e);
            PageData::default()
        }
    }
}

/// Hover handlers for every text-block overlay, keyed by the last id segment.
fn attach_hover_handlers(document: &Document, overlay_ids: &[String]) -> Result<(), JsValue> {
    for id in overlay_ids.iter().filter(|id| !is_mask_overlay(id)) {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("overlay {} has no element", id);
            continue;
        };
        let key = short_id(id).to_string();

        let enter_key = key.clone();
        let onover = Closure::<dyn FnMut()>::wrap(Box::new(move || in_overlay(&enter_key)));
        el.add_event_listener_with_callback("mouseover", onover.as_ref().unchecked_ref())?;
        onover.forget();

        let onout = Closure::<dyn FnMut()>::wrap(Box::new(move || out_overlay(&key)));
        el.add_event_listener_with_callback("mouseout", onout.as_ref().unchecked_ref())?;
        onout.forget();
    }
    Ok(())
}

// Deep-zoom tiles should show real pixels when zoomed in.
fn crisp_canvases(document: &Document) -> Result<(), JsValue> {
    for canvas in html_elements(&document.get_elements_by_tag_name("canvas")) {
        canvas.style().set_property("image-rendering", "crisp-edges")?;
    }
    Ok(())
}

/// Overlays are generated `passive` so they ignore the mouse until hover
/// handling is wired up.
fn enable_interaction(document: &Document) {
    for el in elements_by_class(document, PASSIVE_CLASS) {
        el.set_class_name(&without_class(&el.class_name(), PASSIVE_CLASS));
    }
}

/// Setup that needs only the document: checkbox wiring and the folder page gallery.
fn page_setup(document: &Document) {
    let mut queue: SetupQueue<JsValue> = SetupQueue::new();
    let doc = document.clone();
    queue.push("toggle checkboxes", move || toggles::attach_checkbox_handlers(&doc));
    let doc = document.clone();
    queue.push("thumbnail overlays", move || gallery::setup_thumb_overlays(&doc));
    let doc = document.clone();
    queue.push("table sort hooks", move || gallery::attach_sort_hooks(&doc));
    queue.run();
}

fn image_setup(state: Rc<RefCell<State>>, viewer: Viewer) {
    let (document, search) = {
        let s = state.borrow();
        (
            s.document.clone(),
            s.window.location().search().unwrap_or_default(),
        )
    };
    let overlay_ids = viewer.overlay_ids();
    log::debug!("viewer ready with {} overlays", overlay_ids.len());

    let mut queue: SetupQueue<JsValue> = SetupQueue::new();
    {
        let st = state.clone();
        let ids = overlay_ids.clone();
        queue.push("color groups", move || {
            let s = st.borrow();
            let mut page = DomPage::new(&s.document);
            s.linker
                .color_groups(&mut page, ids.iter().map(String::as_str));
            Ok(())
        });
    }
    for toggle in [Toggle::Grid, Toggle::TextBlock, Toggle::Blown] {
        let st = state.clone();
        queue.push(toggle.checkbox_id(), move || {
            let s = st.borrow();
            toggles::apply_toggle(&s.document, s.viewer.as_ref(), &s.data, toggle)
        });
    }
    {
        let doc = document.clone();
        let viewer = viewer.clone();
        queue.push("result boxes", move || {
            let n = boxes::add_result_boxes(&doc, &viewer, &search)?;
            if n > 0 {
                log::info!("added {} result boxes", n);
            }
            Ok(())
        });
    }
    {
        let doc = document.clone();
        queue.push("hover handlers", move || attach_hover_handlers(&doc, &overlay_ids));
    }
    {
        let doc = document.clone();
        queue.push("crisp canvases", move || crisp_canvases(&doc));
    }
    queue.push("enable interaction", move || {
        enable_interaction(&document);
        Ok(())
    });

    let failed = queue.run();
    if !failed.is_empty() {
        log::warn!("image page setup incomplete: {}", failed.join(", "));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let search = window.location().search().unwrap_or_default();
    init_logging(log_level_from_query(&search));

    let data = load_page_data(&window, &document);
    let linker = Linker::new(OverlayGroups::from_page_data(&data));
    let state = Rc::new(RefCell::new(State {
        window,
        document: document.clone(),
        data,
        linker,
        viewer: None,
    }));
    STATE.with(|st| st.replace(Some(state)));

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let onload = Closure::<dyn FnMut()>::wrap(Box::new(move || page_setup(&doc)));
        document
            .add_event_listener_with_callback("DOMContentLoaded", onload.as_ref().unchecked_ref())?;
        onload.forget();
    } else {
        page_setup(&document);
    }
    Ok(())
}

/// Called by the page once the viewer has opened its image and placed its
/// overlays, e.g. `viewer.addHandler("open", () => viewerReady(viewer))`.
#[wasm_bindgen(js_name = viewerReady)]
pub fn viewer_ready(viewer: JsValue) {
    let viewer: Viewer = viewer.unchecked_into();
    let Some(state) = STATE.with(|st| st.borrow().clone()) else {
        log::error!("viewerReady called before start");
        return;
    };
    state.borrow_mut().viewer = Some(viewer.clone());
    image_setup(state, viewer);
}

#[wasm_bindgen(js_name = inOverlay)]
pub fn in_overlay(id: &str) {
    with_state(|s| {
        let mut page = DomPage::new(&s.document);
        s.linker.hover_enter(&mut page, id);
    });
}

#[wasm_bindgen(js_name = outOverlay)]
pub fn out_overlay(id: &str) {
    with_state(|s| {
        let mut page = DomPage::new(&s.document);
        s.linker.hover_exit(&mut page, id);
    });
}

#[wasm_bindgen(js_name = toggleGrid)]
pub fn toggle_grid() {
    toggles::run_toggle(Toggle::Grid);
}

#[wasm_bindgen(js_name = toggleBlown)]
pub fn toggle_blown() {
    toggles::run_toggle(Toggle::Blown);
}

#[wasm_bindgen(js_name = toggleTextBlock)]
pub fn toggle_text_block() {
    toggles::run_toggle(Toggle::TextBlock);
}

#[wasm_bindgen(js_name = toggleBlownThumbs)]
pub fn toggle_blown_thumbs() {
    toggles::run_toggle(Toggle::BlownThumbs);
}

#[wasm_bindgen(js_name = toggleHistograms)]
pub fn toggle_histograms() {
    toggles::run_toggle(Toggle::Histograms);
}

/// Header click handler of the sortable image table.
#[wasm_bindgen(js_name = thClick)]
pub fn th_click() {
    let res = with_state(|s| gallery::sync_panels(&s.document));
    if let Some(Err(e)) = res {
        log::error!("panel sync failed: {:?}", e);
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn passive_class_is_removed() {
        let doc = document();
        let el = doc.create_element("div").unwrap();
        el.set_class_name("overlay passive");
        doc.body().unwrap().append_child(&el).unwrap();

        enable_interaction(&doc);
        assert_eq!(el.class_name(), "overlay");
        el.remove();
    }

    #[wasm_bindgen_test]
    fn page_data_from_script() {
        let doc = document();
        let script = doc.create_element("script").unwrap();
        script.set_attribute("type", "application/json").unwrap();
        script.set_id(PAGE_DATA_ID);
        script.set_text_content(Some(r#"{"next":{"B1":"B2"},"ocr":{"B1":"hello"}}"#));
        doc.body().unwrap().append_child(&script).unwrap();

        let window = web_sys::window().unwrap();
        let data = load_page_data(&window, &doc);
        assert_eq!(data.next.get("B1").map(String::as_str), Some("B2"));
        assert_eq!(data.ocr.get("B1").map(String::as_str), Some("hello"));
        script.remove();
    }
}
