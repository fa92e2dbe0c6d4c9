use crate::constants::SCROLL_DOWN_BUTTON_ID;
use crate::core::constants::SNAP_COOLDOWN_MS;
use crate::core::snap::next_section_below;
use crate::core::{SnapController, WheelDecision};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn arm_cooldown(window: &web::Window, snap: Rc<RefCell<SnapController>>) {
    let release = Closure::once_into_js(move || {
        snap.borrow_mut().release();
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        release.unchecked_ref(),
        SNAP_COOLDOWN_MS,
    ) {
        log::warn!("[snap] setTimeout failed: {:?}", e);
    }
}

pub fn handle_wheel(ev: &web::WheelEvent, snap: &Rc<RefCell<SnapController>>) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let (scroll_y, viewport) = dom::scroll_metrics(&window);
    let tops = dom::section_tops(&document);
    let decision = snap
        .borrow_mut()
        .on_wheel(ev.delta_y(), scroll_y, viewport, &tops);
    if let WheelDecision::SnapTo(top) = decision {
        ev.prevent_default();
        log::info!("[snap] {:.0} -> {:.0}", scroll_y, top);
        dom::smooth_scroll_to(&window, top);
        arm_cooldown(&window, snap.clone());
    }
}

// Non-passive so the default scroll can be cancelled when snapping
pub fn wire_wheel_snap(snap: Rc<RefCell<SnapController>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            handle_wheel(&ev, &snap);
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}

/// "Scroll down" affordance: smooth-scroll to the first section below the
/// viewport midpoint. Independent of the wheel controller's state.
pub fn wire_scroll_down_button(document: &web::Document) {
    dom::add_click_listener(document, SCROLL_DOWN_BUTTON_ID, move || {
        let Some(window) = web::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let (scroll_y, viewport) = dom::scroll_metrics(&window);
        let tops = dom::section_tops(&document);
        if let Some(top) = next_section_below(&tops, scroll_y + viewport / 2.0) {
            dom::smooth_scroll_to(&window, top);
        }
    });
}
