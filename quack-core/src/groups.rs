use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-page data emitted by the page generator next to the viewer markup.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default)]
    pub ocr: HashMap<String, String>,
    #[serde(default)]
    pub next: HashMap<String, String>,
    #[serde(default)]
    pub prev: HashMap<String, String>,
    // background images for the full-page blown masks
    pub white_overlay_url: Option<String>,
    pub black_overlay_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PageDataError {
    #[error("page data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageData {
    pub fn from_json(text: &str) -> Result<Self, PageDataError> {
        if text.trim().is_empty() {
            return Ok(PageData::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}

/// Single text block as seen by the linker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayGroup<'a> {
    pub id: &'a str,
    pub ocr_text: Option<&'a str>,
    pub next: Option<&'a str>,
    pub prev: Option<&'a str>,
}

/// Reading-order links between text-block overlays. Built once, read-only after.
#[derive(Clone, Debug, Default)]
pub struct OverlayGroups {
    ocr: HashMap<String, String>,
    next: HashMap<String, String>,
    prev: HashMap<String, String>,
}

impl OverlayGroups {
    pub fn new(
        ocr: HashMap<String, String>,
        next: HashMap<String, String>,
        prev: HashMap<String, String>,
    ) -> Self {
        OverlayGroups { ocr, next, prev }
    }

    pub fn from_page_data(data: &PageData) -> Self {
        OverlayGroups::new(data.ocr.clone(), data.next.clone(), data.prev.clone())
    }

    /// Build from `(id, next)` pairs, deriving `prev` as the inverse mapping.
    pub fn from_links<'a, I>(links: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut next = HashMap::new();
        let mut prev = HashMap::new();
        for (from, to) in links {
            next.insert(from.to_string(), to.to_string());
            prev.insert(to.to_string(), from.to_string());
        }
        OverlayGroups::new(HashMap::new(), next, prev)
    }

    pub fn with_ocr(mut self, id: &str, text: &str) -> Self {
        self.ocr.insert(id.to_string(), text.to_string());
        self
    }

    pub fn ocr(&self, id: &str) -> Option<&str> {
        self.ocr.get(id).map(String::as_str)
    }

    pub fn next(&self, id: &str) -> Option<&str> {
        self.next.get(id).map(String::as_str)
    }

    pub fn prev(&self, id: &str) -> Option<&str> {
        self.prev.get(id).map(String::as_str)
    }

    pub fn get<'a>(&'a self, id: &'a str) -> OverlayGroup<'a> {
        OverlayGroup {
            id,
            ocr_text: self.ocr(id),
            next: self.next(id),
            prev: self.prev(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ocr.is_empty() && self.next.is_empty() && self.prev.is_empty()
    }
}
