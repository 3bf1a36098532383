use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCollection, HtmlElement, HtmlInputElement, Window};

use quack_core::Display;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Later calls only change the level.
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Log level requested with `?log=debug`, `info` when absent or unknown.
pub fn log_level_from_query(search: &str) -> LevelFilter {
    quack_core::query::query_value(search, "log")
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Read a string property set on `window` by the host page.
pub fn window_string(window: &Window, key: &str) -> Option<String> {
    let v = js_sys::Reflect::get(window, &JsValue::from_str(key)).ok()?;
    if v.is_undefined() || v.is_null() {
        return None;
    }
    match v.as_string() {
        Some(s) => Some(s),
        // objects are accepted too and re-serialized for serde
        None => js_sys::JSON::stringify(&v).ok()?.as_string(),
    }
}

/// Snapshot of a live collection as `HtmlElement`s.
pub fn html_elements(collection: &HtmlCollection) -> Vec<HtmlElement> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn elements_by_class(document: &Document, class: &str) -> Vec<HtmlElement> {
    html_elements(&document.get_elements_by_class_name(class))
}

/// First descendant of `el` with `class`.
pub fn first_by_class(el: &Element, class: &str) -> Option<Element> {
    el.get_elements_by_class_name(class).item(0)
}

/// First descendant of `el` with tag `tag`.
pub fn first_by_tag(el: &Element, tag: &str) -> Option<Element> {
    el.get_elements_by_tag_name(tag).item(0)
}

/// Missing checkboxes read as unchecked.
pub fn checkbox_checked(document: &Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

pub fn set_display(el: &HtmlElement, display: Display) -> Result<(), JsValue> {
    el.style().set_property("display", display.as_css())
}

pub fn set_display_by_class(
    document: &Document,
    class: &str,
    display: Display,
) -> Result<(), JsValue> {
    for el in elements_by_class(document, class) {
        set_display(&el, display)?;
    }
    Ok(())
}
