use crate::panel;
use wasm_bindgen::JsCast;
use web_sys as web;

// Wire an 'H' key handler to toggle the tuning panel
pub fn wire_panel_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.repeat() {
                    return;
                }
                let key = ev.key();
                if key == "h" || key == "H" {
                    panel::toggle(&doc);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
