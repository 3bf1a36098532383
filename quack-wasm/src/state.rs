use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use quack_core::{Linker, PageData};

use crate::viewer::Viewer;

/// Runtime state of the page, shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub data: PageData,
    pub linker: Linker,
    // set once the viewer reports it is open
    pub viewer: Option<Viewer>,
}

thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

/// Run `f` against the installed state. `None` before `start` has run.
pub fn with_state<R>(f: impl FnOnce(&State) -> R) -> Option<R> {
    let st = STATE.with(|st| st.borrow().clone())?;
    let s = st.borrow();
    Some(f(&s))
}
