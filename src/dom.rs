//! Thin web-sys glue shared by the behavior installers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes element lookup, event-listener registration and best-effort
//! class/style mutation so behavior modules do not repeat closure plumbing.
//! Listeners are registered for the page lifetime and their closures are
//! leaked with `forget`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, PageError> {
    document.body().ok_or(PageError::MissingElement("body"))
}

/// Element by id, as an `HtmlElement`.
pub fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement, PageError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
        .ok_or(PageError::MissingElement(id))
}

/// First element matching `selector`, if any.
pub fn query<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Option<T>, PageError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<T>().cloned()))
}

/// All elements matching `selector`, in document order.
pub fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Vec<T>, PageError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect())
}

/// Register `handler` for `event` on `target` for the page lifetime.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), PageError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Register `handler` for a single dispatch of `event` on `target`.
pub fn listen_once<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), PageError>
where
    E: FromWasmAbi + 'static,
{
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        log::warn!("adding class {class} failed: {err:?}");
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().remove_1(class) {
        log::warn!("removing class {class} failed: {err:?}");
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("setting style {property} failed: {err:?}");
    }
}
