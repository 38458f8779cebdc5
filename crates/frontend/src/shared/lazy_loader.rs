//! Swaps `data-src` into `src` once an image scrolls into view.

use super::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

const LAZY_SELECTOR: &str = "img[data-src]";
const DATA_SRC: &str = "data-src";

pub fn init() {
    let images = dom::query_all(LAZY_SELECTOR);
    if images.is_empty() {
        return;
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let img = entry.target();
                if let Some(src) = img.get_attribute(DATA_SRC) {
                    let _ = img.set_attribute("src", &src);
                    let _ = img.remove_attribute(DATA_SRC);
                }
                observer.unobserve(&img);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, lazy loading disabled: {e:?}");
            return;
        }
    };
    on_intersect.forget();

    for img in &images {
        observer.observe(img);
    }
    log::debug!("Lazy loading {} images", images.len());
}
