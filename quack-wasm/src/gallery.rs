//! Folder page: thumbnail blown masks and keeping the thumbnail and
//! histogram panels in the order of the sortable image table.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement};

use quack_core::gallery::{sort_by_table, thumb_mask_background};

use crate::constants::{
    HISTOGRAMS_CLASS, SORTABLE_CLASS, THUMB_IMG_CLASS, THUMB_LINK_CLASS, THUMB_OVERLAY_CLASS,
    THUMBS_CLASS,
};
use crate::utils::{elements_by_class, first_by_class, first_by_tag};

fn href_of(el: &Element) -> Option<String> {
    first_by_tag(el, "a")
        .and_then(|a| a.dyn_into::<HtmlAnchorElement>().ok())
        .map(|a| a.href())
}

/// Size each thumbnail's mask overlay to its image and stack the black and
/// white mask thumbnails as its background.
pub fn setup_thumb_overlays(document: &Document) -> Result<(), JsValue> {
    for link in elements_by_class(document, THUMB_LINK_CLASS) {
        let (Some(span), Some(img)) = (
            first_by_class(&link, THUMB_OVERLAY_CLASS),
            first_by_class(&link, THUMB_IMG_CLASS),
        ) else {
            continue;
        };
        let (Ok(span), Ok(img)) = (
            span.dyn_into::<HtmlElement>(),
            img.dyn_into::<HtmlImageElement>(),
        ) else {
            continue;
        };
        let src = img.src();
        let Some(background) = thumb_mask_background(&src) else {
            log::warn!("thumbnail {} has no mask variants", src);
            continue;
        };
        let style = span.style();
        style.set_property("width", &format!("{}px", img.width()))?;
        style.set_property("height", &format!("{}px", img.height()))?;
        style.set_property("background", &background)?;
    }
    Ok(())
}

/// Page links of the sortable tables, one per row, in row order.
fn table_links(document: &Document) -> Vec<String> {
    let mut links = Vec::new();
    let tables = document.get_elements_by_class_name(SORTABLE_CLASS);
    for i in 0..tables.length() {
        let Some(table) = tables.item(i) else { continue };
        let rows = table.get_elements_by_tag_name("tr");
        for r in 0..rows.length() {
            // header rows have no td
            if let Some(cell) = rows.item(r).and_then(|row| first_by_tag(&row, "td"))
                && let Some(href) = href_of(&cell)
            {
                links.push(href);
            }
        }
    }
    links
}

fn single_panel(document: &Document, class: &str) -> Option<Element> {
    let panels = document.get_elements_by_class_name(class);
    if panels.length() != 1 {
        log::warn!("expected 1 div.{} but got {}", class, panels.length());
        return None;
    }
    panels.item(0)
}

/// Reorder the children of `panel` to follow `links`.
pub fn sort_panel(panel: &Element, links: &[String]) -> Result<(), JsValue> {
    let children = panel.children();
    let mut items: Vec<(Element, Option<String>)> = (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|el| {
            let href = href_of(&el);
            (el, href)
        })
        .collect();
    sort_by_table(&mut items, links, |item| item.1.as_deref());
    // appending an attached node moves it
    for (el, _) in &items {
        panel.append_child(el)?;
    }
    Ok(())
}

/// Align the thumbnail and histogram panels with the table order.
pub fn sync_panels(document: &Document) -> Result<(), JsValue> {
    let (Some(thumbs), Some(hists)) = (
        single_panel(document, THUMBS_CLASS),
        single_panel(document, HISTOGRAMS_CLASS),
    ) else {
        return Ok(());
    };
    let links = table_links(document);
    sort_panel(&thumbs, &links)?;
    sort_panel(&hists, &links)?;
    Ok(())
}

/// Re-sync the panels after every header click. The table sorting script
/// handles the click first.
pub fn attach_sort_hooks(document: &Document) -> Result<(), JsValue> {
    let doc = document.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        if let Err(e) = sync_panels(&doc) {
            log::error!("panel sync failed: {:?}", e);
        }
    }));
    for table in elements_by_class(document, SORTABLE_CLASS) {
        let headers = table.get_elements_by_tag_name("th");
        for h in 0..headers.length() {
            if let Some(th) = headers.item(h) {
                th.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
            }
        }
    }
    onclick.forget();
    Ok(())
}
