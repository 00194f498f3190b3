//! Thin web-sys helpers shared by the startup wiring.
//!
//! Everything here maps `JsValue` failures into [`WireError`] so feature
//! setup can use `?` and the boot sequence can log one line per failure.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::WireError;

/// Convert a thrown JS value into a [`WireError`].
pub fn js_err(value: JsValue) -> WireError {
    if let Some(text) = value.as_string() {
        return WireError::Js(text);
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return WireError::Js(String::from(err.message()));
    }
    WireError::Js(format!("{value:?}"))
}

/// Log a failed side effect that happened inside an event handler.
pub fn report(what: &str, result: Result<(), WireError>) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e}");
    }
}

pub fn window() -> Result<Window, WireError> {
    web_sys::window().ok_or(WireError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, WireError> {
    window.document().ok_or(WireError::NoDocument)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WireError> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                out.push(element);
            }
        }
    }
    Ok(out)
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), WireError> {
    element.class_list().toggle_with_force(class, on).map_err(js_err)?;
    Ok(())
}

/// Document-space top edge of `element`; `0.0` for non-HTML elements.
pub fn offset_top(element: &Element) -> f64 {
    element.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
}

/// Document-space height of `element`; `0.0` for non-HTML elements.
pub fn offset_height(element: &Element) -> f64 {
    element.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
}

/// Animated scroll to a document offset.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WireError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Drive `step` once per animation frame until it returns `false`.
///
/// `step` receives the frame timestamp in milliseconds.
pub fn animate<F>(window: &Window, mut step: F) -> Result<(), WireError>
where
    F: FnMut(f64) -> bool + 'static,
{
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        if !step(now) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let scheduled = match holder_for_cb.borrow().as_ref() {
            Some(cb) => window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()).map_err(js_err),
            None => return,
        };
        if let Err(e) = scheduled {
            log::warn!("animation stopped: {e}");
            holder_for_cb.borrow_mut().take();
        }
    });

    window.request_animation_frame(cb.as_ref().unchecked_ref()).map_err(js_err)?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}
