use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use quack_core::{Page, StatusField};

use crate::constants::{ID_BOX, ID_NEXT_BOX, OCR_BOX};

/// `Page` over the live document.
pub struct DomPage<'a> {
    document: &'a Document,
}

impl<'a> DomPage<'a> {
    pub fn new(document: &'a Document) -> Self {
        DomPage { document }
    }
}

fn status_id(field: StatusField) -> &'static str {
    match field {
        StatusField::Id => ID_BOX,
        StatusField::NextId => ID_NEXT_BOX,
        StatusField::Ocr => OCR_BOX,
    }
}

impl Page for DomPage<'_> {
    fn class_name(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id).map(|e| e.class_name())
    }

    fn set_class_name(&mut self, id: &str, class_name: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_class_name(class_name);
        }
    }

    fn set_status(&mut self, field: StatusField, text: &str) {
        // OCR text is shown as text, never parsed as markup
        if let Some(el) = self.document.get_element_by_id(status_id(field))
            && let Ok(el) = el.dyn_into::<HtmlElement>()
        {
            el.set_inner_text(text);
        }
    }
}
