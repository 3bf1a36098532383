use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use quack_core::PageData;
use quack_core::toggles::{Display, Toggle, mask_background, overlay_opacity, panel_display};

use crate::constants::{BLACK_OVERLAY_CLASS, HISTOGRAMS_CLASS, THUMBS_CLASS, WHITE_OVERLAY_CLASS};
use crate::state::with_state;
use crate::utils::{checkbox_checked, elements_by_class, set_display, set_display_by_class};
use crate::viewer::{Viewer, set_overlay_opacity};

/// Bring the page in line with the checkbox of `toggle`.
pub fn apply_toggle(
    document: &Document,
    viewer: Option<&Viewer>,
    data: &PageData,
    toggle: Toggle,
) -> Result<(), JsValue> {
    let checked = checkbox_checked(document, toggle.checkbox_id());

    if toggle == Toggle::Histograms {
        let (thumbs, histograms) = panel_display(checked);
        set_display_by_class(document, THUMBS_CLASS, thumbs)?;
        set_display_by_class(document, HISTOGRAMS_CLASS, histograms)?;
        return Ok(());
    }

    if let Some(viewer) = viewer {
        set_overlay_opacity(viewer, overlay_opacity(checked), |id| {
            toggle.affects_viewer_overlay(id)
        });
    }

    let shown = Display::shown(checked);
    for class in toggle.display_classes() {
        let url = match *class {
            WHITE_OVERLAY_CLASS => data.white_overlay_url.as_deref(),
            BLACK_OVERLAY_CLASS => data.black_overlay_url.as_deref(),
            _ => None,
        };
        for el in elements_by_class(document, class) {
            if url.is_some() {
                lazy_background(&el, shown, url)?;
            }
            set_display(&el, shown)?;
        }
    }
    Ok(())
}

// Mask images are large, so they are only fetched the first time masks are shown.
fn lazy_background(el: &HtmlElement, shown: Display, url: Option<&str>) -> Result<(), JsValue> {
    let style = el.style();
    let current = style.get_property_value("background-image")?;
    if let Some(bg) = mask_background(&current, shown, url) {
        style.set_property("background-image", &bg)?;
    }
    Ok(())
}

/// Apply `toggle` against the installed state, logging failures.
pub fn run_toggle(toggle: Toggle) {
    let res = with_state(|s| apply_toggle(&s.document, s.viewer.as_ref(), &s.data, toggle));
    match res {
        Some(Err(e)) => log::error!("{:?} toggle failed: {:?}", toggle, e),
        None => log::warn!("{:?} toggle before start", toggle),
        Some(Ok(())) => {}
    }
}

/// Re-apply each toggle whenever its checkbox changes.
pub fn attach_checkbox_handlers(document: &Document) -> Result<(), JsValue> {
    for toggle in Toggle::ALL {
        let Some(input) = document.get_element_by_id(toggle.checkbox_id()) else {
            continue;
        };
        let onchange = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            run_toggle(toggle);
        }));
        input.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }
    Ok(())
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use wasm_bindgen_test::*;
    use web_sys::HtmlInputElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn checkbox(doc: &Document, id: &str) -> HtmlInputElement {
        let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        input.set_type("checkbox");
        input.set_id(id);
        doc.body().unwrap().append_child(&input).unwrap();
        input
    }

    fn div(doc: &Document, class: &str) -> HtmlElement {
        let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
        el.set_class_name(class);
        doc.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn display(el: &HtmlElement) -> String {
        el.style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    fn on_then_off_restores_initial_display() {
        let doc = document();
        let data = PageData::default();
        for toggle in [Toggle::Grid, Toggle::Blown, Toggle::BlownThumbs] {
            let input = checkbox(&doc, toggle.checkbox_id());
            let els: Vec<HtmlElement> = toggle
                .display_classes()
                .iter()
                .map(|class| {
                    let el = div(&doc, class);
                    // generated pages start with the overlays hidden
                    el.style().set_property("display", "none").unwrap();
                    el
                })
                .collect();
            let initial: Vec<String> = els.iter().map(display).collect();

            input.set_checked(true);
            apply_toggle(&doc, None, &data, toggle).unwrap();
            assert!(els.iter().all(|el| display(el) == "block"), "{:?} on", toggle);

            input.set_checked(false);
            apply_toggle(&doc, None, &data, toggle).unwrap();
            let after: Vec<String> = els.iter().map(display).collect();
            assert_eq!(after, initial, "{:?} off", toggle);

            input.remove();
            els.iter().for_each(|el| el.remove());
        }
    }

    #[wasm_bindgen_test]
    fn blown_masks_get_background_when_shown() {
        let doc = document();
        let input = checkbox(&doc, "toggle_blown");
        let white = div(&doc, WHITE_OVERLAY_CLASS);
        let data = PageData {
            white_overlay_url: Some("white.png".to_string()),
            ..PageData::default()
        };

        apply_toggle(&doc, None, &data, Toggle::Blown).unwrap();
        assert_eq!(display(&white), "none");
        assert_eq!(white.style().get_property_value("background-image").unwrap(), "");

        input.set_checked(true);
        apply_toggle(&doc, None, &data, Toggle::Blown).unwrap();
        assert_eq!(display(&white), "block");
        assert!(
            white
                .style()
                .get_property_value("background-image")
                .unwrap()
                .contains("white.png")
        );
        input.remove();
        white.remove();
    }

    #[wasm_bindgen_test]
    fn histograms_replace_thumbs() {
        let doc = document();
        let input = checkbox(&doc, "toggle_histograms");
        let thumbs = div(&doc, THUMBS_CLASS);
        let hists = div(&doc, HISTOGRAMS_CLASS);
        let data = PageData::default();

        input.set_checked(true);
        apply_toggle(&doc, None, &data, Toggle::Histograms).unwrap();
        assert_eq!(display(&thumbs), "none");
        assert_eq!(display(&hists), "block");

        input.set_checked(false);
        apply_toggle(&doc, None, &data, Toggle::Histograms).unwrap();
        assert_eq!(display(&thumbs), "block");
        assert_eq!(display(&hists), "none");

        input.remove();
        thumbs.remove();
        hists.remove();
    }
}
