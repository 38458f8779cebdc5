//! Baseline accessibility affordances applied to every page.

use super::dom;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

const SKIP_LINK_CLASSES: &str = "sr-only focus:not-sr-only focus:absolute focus:top-0 focus:left-0 focus:bg-white focus:text-black focus:p-4 focus:z-50";
const FOCUS_RING: [&str; 3] = ["ring-2", "ring-blue-500", "outline-none"];

pub fn init() {
    add_skip_link();
    add_aria_labels();
    add_focus_rings();
}

fn add_skip_link() {
    let (Some(document), Some(body)) = (dom::document(), dom::body()) else {
        return;
    };
    let Ok(link) = document.create_element("a") else {
        return;
    };
    let _ = link.set_attribute("href", "#main-content");
    link.set_class_name(SKIP_LINK_CLASSES);
    link.set_text_content(Some("Skip to main content"));
    let _ = body.insert_before(&link, body.first_child().as_ref());
}

fn add_aria_labels() {
    if let Some(nav) = dom::first("nav") {
        let _ = nav.set_attribute("aria-label", "Main navigation");
    }

    for form in dom::query_all("form") {
        if form.get_attribute("aria-label").is_none() {
            let _ = form.set_attribute("aria-label", "Contact form");
        }
    }

    for button in dom::query_all("button") {
        if button.get_attribute("aria-label").is_none() {
            let label = button.text_content().unwrap_or_default();
            let _ = button.set_attribute("aria-label", label.trim());
        }
    }
}

fn add_focus_rings() {
    let ring: Vec<String> = FOCUS_RING.iter().map(|c| c.to_string()).collect();
    for element in dom::query_all("a, button, input, textarea") {
        let target: &EventTarget = element.unchecked_ref();

        let on_focus = {
            let (element, ring) = (element.clone(), ring.clone());
            move |_: Event| dom::add_classes(&element, &ring)
        };
        dom::listen(target, "focus", on_focus);

        let on_blur = {
            let (element, ring) = (element.clone(), ring.clone());
            move |_: Event| dom::remove_classes(&element, &ring)
        };
        dom::listen(target, "blur", on_blur);
    }
}
