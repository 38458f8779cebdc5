use crate::domain::a002_gallery::GalleryController;
use crate::domain::a003_contact::ContactFormValidator;
use crate::layout::mobile_menu;
use crate::shared::{accessibility, dom, lazy_loader};
use contracts::shared::config::{load_config, SiteConfig, CONFIG_ELEMENT_ID};
use contracts::shared::page::PageSignals;

/// Reads `#site-config` overrides, falling back to the built-in defaults.
fn site_config() -> SiteConfig {
    let raw = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    match load_config(raw.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using default site config");
            SiteConfig::default()
        }
    }
}

/// Wires every page component into the static host page.
pub fn boot() {
    let Some(document) = dom::document() else {
        log::error!("No document available, nothing to initialize");
        return;
    };

    let config = site_config();
    let path = dom::location_path();
    let title = document.title();
    let heading = dom::first("h1").and_then(|h| h.text_content());
    let page = PageSignals {
        path: &path,
        title: &title,
        heading: heading.as_deref(),
    };
    log::debug!("Current path: {path}, title: {title}, h1: {heading:?}");

    mobile_menu::init();

    if page.is_portfolio() {
        log::info!("Portfolio page detected, initializing gallery");
        match GalleryController::initialize(config.gallery.clone()) {
            Some(gallery) => {
                log::info!("Gallery initialized with {} artworks", gallery.artwork_count())
            }
            None => log::warn!("Gallery was not initialized"),
        }
    } else {
        log::debug!("Not on portfolio page");
    }

    if page.is_contact() {
        ContactFormValidator::attach(&config.contact);
    }

    lazy_loader::init();
    accessibility::init();
}
