use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use quack_core::{ResultBox, result_boxes};

use crate::constants::RESULT_BOX_CLASS;
use crate::viewer::{Rect, Viewer, top_left_placement};

fn create_box_div(document: &Document, id: &str, text: &str) -> Result<Element, JsValue> {
    let div = document.create_element("div")?;
    div.set_id(id);
    div.set_class_name(RESULT_BOX_CLASS);
    div.set_text_content(Some(text));
    let body = document.body().ok_or("document has no body")?;
    body.append_child(&div)?;
    Ok(div)
}

fn add_result_box(
    document: &Document,
    viewer: &Viewer,
    index: usize,
    b: &ResultBox,
) -> Result<(), JsValue> {
    log::debug!(
        "result box x={}, y={}, w={}, h={}, text={}",
        b.x,
        b.y,
        b.w,
        b.h,
        b.text
    );
    let div = create_box_div(document, &format!("searchresult{}", index), &b.text)?;
    viewer.add_overlay(&div, &Rect::new(b.x, b.y, b.w, b.h), &top_left_placement())?;
    Ok(())
}

/// Show every valid `box` parameter of the page URL on the viewer.
/// Returns how many boxes were added.
pub fn add_result_boxes(
    document: &Document,
    viewer: &Viewer,
    search: &str,
) -> Result<usize, JsValue> {
    let boxes = result_boxes(search);
    for (i, b) in boxes.iter().enumerate() {
        add_result_box(document, viewer, i, b)?;
    }
    Ok(boxes.len())
}
