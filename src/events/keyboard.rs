use crate::core::ViewStore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global keyboard shortcuts: Enter focuses the laptop from overview,
/// Escape exits focus, and the arrow keys step the carousel while focused.
/// The key -> action mapping itself lives in `core::state`.
pub fn wire_global_keydown(store: Rc<RefCell<ViewStore>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        store.borrow_mut().apply_key(ev.key().as_str());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
