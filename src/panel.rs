use crate::constants::DEBUG_PANEL_ID;
use crate::core::tunables::{SliderSpec, SLIDERS};
use crate::core::Tunables;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

fn create_input(
    document: &web::Document,
    kind: &str,
) -> anyhow::Result<web::HtmlInputElement> {
    let el = document
        .create_element("input")
        .map_err(|e| anyhow::anyhow!("create input: {:?}", e))?;
    let input: web::HtmlInputElement = el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not an input: {:?}", e))?;
    input.set_type(kind);
    Ok(input)
}

fn append_row(
    document: &web::Document,
    container: &web::Element,
    label: &str,
    input: &web::HtmlInputElement,
) -> anyhow::Result<()> {
    let row = document
        .create_element("label")
        .map_err(|e| anyhow::anyhow!("create label: {:?}", e))?;
    row.set_text_content(Some(label));
    row.append_child(input)
        .map_err(|e| anyhow::anyhow!("append input: {:?}", e))?;
    container
        .append_child(&row)
        .map_err(|e| anyhow::anyhow!("append row: {:?}", e))?;
    Ok(())
}

fn wire_slider(
    document: &web::Document,
    container: &web::Element,
    spec: &SliderSpec,
    tunables: &Rc<RefCell<Tunables>>,
) -> anyhow::Result<()> {
    let input = create_input(document, "range")?;
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());
    input.set_value(&tunables.borrow().get(spec.field).to_string());
    append_row(document, container, spec.label, &input)?;

    let field = spec.field;
    let tunables = tunables.clone();
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Ok(v) = source.value().parse::<f32>() {
            tunables.borrow_mut().set(field, v);
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

fn wire_helpers_checkbox(
    document: &web::Document,
    container: &web::Element,
    tunables: &Rc<RefCell<Tunables>>,
) -> anyhow::Result<()> {
    let input = create_input(document, "checkbox")?;
    input.set_checked(tunables.borrow().show_helpers);
    append_row(document, container, "helpers", &input)?;

    let tunables = tunables.clone();
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        tunables.borrow_mut().show_helpers = source.checked();
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

/// Fill `#debug-panel` with one control per tunable. Without the container
/// the scene simply runs with the defaults.
pub fn build(document: &web::Document, tunables: &Rc<RefCell<Tunables>>) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(DEBUG_PANEL_ID) else {
        log::info!("[panel] no #{} element; tuning disabled", DEBUG_PANEL_ID);
        return Ok(());
    };
    for spec in SLIDERS {
        wire_slider(document, &container, spec, tunables)?;
    }
    wire_helpers_checkbox(document, &container, tunables)?;
    hide(document);
    log::info!("[panel] {} controls (press H to toggle)", SLIDERS.len() + 1);
    Ok(())
}
