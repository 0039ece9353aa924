//! Element lookup, inline style and listener helpers.
//!
//! Lookups return `Option` and never log: a missing element only disables the
//! behavior that needed it.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, PointerEvent};

/// Resolve `#id` as an `HtmlElement`.
pub fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Every `HtmlElement` matching `selector`, in document order.
pub fn elements_by_selector(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set one inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set {property}: {err:?}");
    }
}

/// Bind a pointer event listener for the lifetime of the page.
pub fn on_pointer(element: &HtmlElement, event: &str, handler: impl FnMut(PointerEvent) + 'static) {
    let closure = Closure::<dyn FnMut(PointerEvent)>::new(handler);
    if let Err(err) = element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to bind {event}: {err:?}");
    }
    closure.forget();
}

/// Bind a click listener for the lifetime of the page.
pub fn on_click(element: &HtmlElement, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    if let Err(err) = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        log::warn!("failed to bind click: {err:?}");
    }
    closure.forget();
}
