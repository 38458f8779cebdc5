//! Thin helpers over `web_sys` for the static host page.
//!
//! Listeners registered here live for the whole page lifetime, so their
//! closures are intentionally leaked with `forget()`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn first(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .map(|d| query_all_in(&d, selector))
        .unwrap_or_default()
}

/// `querySelectorAll` under any parent node, collected into elements.
pub fn query_all_in(parent: &web_sys::Node, selector: &str) -> Vec<Element> {
    let list = if let Some(d) = parent.dyn_ref::<Document>() {
        d.query_selector_all(selector)
    } else if let Some(e) = parent.dyn_ref::<Element>() {
        e.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        log::warn!("Invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to attach '{event}' listener: {e:?}");
    }
    closure.forget();
}

pub fn add_classes(el: &Element, classes: &[String]) {
    for class in classes {
        let _ = el.class_list().add_1(class);
    }
}

pub fn remove_classes(el: &Element, classes: &[String]) {
    for class in classes {
        let _ = el.class_list().remove_1(class);
    }
}

/// Suspends background scroll while an overlay is open.
pub fn set_scroll_lock(locked: bool) {
    if let Some(body) = body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}
