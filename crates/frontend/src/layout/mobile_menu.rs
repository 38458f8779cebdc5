use crate::shared::dom;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};

const BUTTON_SELECTOR: &str = ".mobile-menu-button";
const MENU_SELECTOR: &str = ".mobile-menu";
const HIDDEN: &str = "hidden";

/// Hamburger toggle for the mobile navigation. No-op on pages without the menu markup.
pub fn init() {
    let (Some(button), Some(menu)) = (dom::first(BUTTON_SELECTOR), dom::first(MENU_SELECTOR))
    else {
        return;
    };

    let toggle = {
        let menu = menu.clone();
        move |_: Event| {
            let _ = menu.class_list().toggle(HIDDEN);
        }
    };
    dom::listen(&button, "click", toggle);

    // Close when clicking anywhere outside the menu and its button.
    let Some(document) = dom::document() else {
        return;
    };
    dom::listen(&document, "click", move |ev: Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = menu.contains(target.as_ref()) || button.contains(target.as_ref());
        if !inside {
            let _ = menu.class_list().add_1(HIDDEN);
        }
    });
}
