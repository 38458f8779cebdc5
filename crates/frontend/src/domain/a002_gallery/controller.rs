use super::ui::{GalleryGrid, GalleryModal};
use crate::domain::a001_artwork::api::{fetch_catalog, CATALOG_URL_ATTR};
use crate::shared::{dom, image_probe};
use contracts::domain::a001_artwork::{Catalog, StaticCatalog};
use contracts::domain::a002_gallery::{
    FilterBar, GalleryFilter, GridContent, Ignored, ModalEvent, ModalMachine, ModalView,
    ProbeRequest, Transition,
};
use contracts::shared::config::GalleryConfig;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlElement, KeyboardEvent};

const MODAL_SELECTOR: &str = ".gallery-modal";

/// Owns the artwork catalog, the active filter and the single modal viewer.
///
/// All state lives in signals, so the controller is `Copy` and can be moved
/// into any event handler.
#[derive(Clone, Copy)]
pub struct GalleryController {
    catalog: RwSignal<Catalog>,
    filter: RwSignal<GalleryFilter>,
    modal: RwSignal<ModalMachine>,
    config: StoredValue<GalleryConfig>,
}

impl GalleryController {
    pub fn new(catalog: Catalog, config: GalleryConfig) -> Self {
        Self {
            catalog: RwSignal::new(catalog),
            filter: RwSignal::new(GalleryFilter::All),
            modal: RwSignal::new(ModalMachine::new()),
            config: StoredValue::new(config),
        }
    }

    /// Builds the modal, wires the filter controls and renders the grid.
    ///
    /// Returns `None` (and logs) when the page has no grid container.
    pub fn initialize(config: GalleryConfig) -> Option<Self> {
        let Some(grid) = dom::by_id(&config.grid_id) else {
            log::error!("Portfolio grid element #{} not found", config.grid_id);
            return None;
        };
        let Ok(grid) = grid.dyn_into::<HtmlElement>() else {
            log::error!("#{} is not an HTML element", config.grid_id);
            return None;
        };

        let catalog = match Catalog::from_source(&StaticCatalog::sample()) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Built-in catalog rejected: {e}");
                Catalog::default()
            }
        };

        let controller = Self::new(catalog, config);
        controller.mount_modal();
        controller.listen_escape();
        controller.wire_filters();
        controller.mount_grid(grid.clone());
        controller.load_remote_catalog(&grid);
        Some(controller)
    }

    pub fn artwork_count(&self) -> usize {
        self.catalog.with_untracked(|c| c.len())
    }

    pub fn is_open(&self) -> bool {
        self.modal.with_untracked(|m| m.is_open())
    }

    pub fn placeholder_image(&self) -> String {
        self.config.with_value(|c| c.placeholder_image.clone())
    }

    pub fn active_filter(&self) -> GalleryFilter {
        self.filter.get_untracked()
    }

    // ------------------------------------------------------------------
    // Grid
    // ------------------------------------------------------------------

    pub fn render_artworks(&self, filter: GalleryFilter) {
        log::debug!("Rendering artworks with filter: {}", filter.as_tag());
        self.filter.set(filter);
    }

    /// Current grid contents; reactive over the catalog and the filter.
    pub fn grid_content(&self) -> GridContent {
        let filter = self.filter.get();
        let empty = self.config.with_value(|c| c.empty_message.clone());
        let content = self
            .catalog
            .with(|c| GridContent::build(c.images(), &filter, &empty));
        if let GridContent::Empty { .. } = content {
            log::debug!("No artworks found for category: {}", filter.as_tag());
        }
        content
    }

    /// Swaps the catalog snapshot. An open modal is closed first, its index
    /// would point into the old catalog.
    pub fn replace_catalog(&self, catalog: Catalog) {
        if self.is_open() {
            self.close_modal();
        }
        log::info!("Catalog replaced, {} artworks", catalog.len());
        self.catalog.set(catalog);
    }

    fn mount_grid(&self, grid: HtmlElement) {
        // static fallback markup inside the container goes away
        grid.set_inner_html("");
        let controller = *self;
        leptos::mount::mount_to(grid, move || view! { <GalleryGrid controller=controller /> })
            .forget();
        self.render_artworks(GalleryFilter::All);
    }

    fn wire_filters(&self) {
        let (selector, classes) = self
            .config
            .with_value(|c| (c.filter_selector.clone(), c.active_filter_classes.clone()));
        let buttons = Rc::new(dom::query_all(&selector));
        log::debug!("Found filter buttons: {}", buttons.len());

        let tags = buttons
            .iter()
            .map(|b| b.get_attribute("data-filter").unwrap_or_default())
            .collect();
        let bar = Rc::new(RefCell::new(FilterBar::new(tags)));
        let controller = *self;

        for (position, button) in buttons.iter().enumerate() {
            let (bar, buttons, classes) = (bar.clone(), buttons.clone(), classes.clone());
            dom::listen(button, "click", move |_: Event| {
                let Some(filter) = bar.borrow_mut().activate(position) else {
                    return;
                };
                {
                    let bar = bar.borrow();
                    for (i, b) in buttons.iter().enumerate() {
                        if bar.is_active(i) {
                            dom::add_classes(b, &classes);
                        } else {
                            dom::remove_classes(b, &classes);
                        }
                    }
                }
                if let GalleryFilter::Unknown(tag) = &filter {
                    log::warn!("Filter control has unknown category '{tag}'");
                }
                controller.render_artworks(filter);
            });
        }
    }

    fn load_remote_catalog(&self, grid: &HtmlElement) {
        let Some(url) = grid.get_attribute(CATALOG_URL_ATTR) else {
            return;
        };
        let controller = *self;
        spawn_local(async move {
            match fetch_catalog(&url).await {
                Ok(catalog) => controller.replace_catalog(catalog),
                Err(e) => log::warn!("Catalog {url} unavailable ({e}), keeping built-in catalog"),
            }
        });
    }

    // ------------------------------------------------------------------
    // Modal
    // ------------------------------------------------------------------

    pub fn open_modal(&self, index: usize) {
        self.dispatch(ModalEvent::Open(index));
    }

    pub fn close_modal(&self) {
        self.dispatch(ModalEvent::Close);
    }

    pub fn close_from_overlay(&self) {
        self.dispatch(ModalEvent::OverlayClick);
    }

    pub fn modal_view(&self) -> ModalView {
        let state = self.modal.with(|m| m.state());
        let texts = self.config.with_value(|c| c.modal_texts());
        self.catalog
            .with(|c| ModalView::render(state, c.images(), &texts))
    }

    pub fn dispatch(&self, event: ModalEvent) {
        let transition = self
            .catalog
            .with_untracked(|c| self.modal.try_update(|m| m.handle(event, c.images())));

        match transition {
            Some(Transition::StartProbe(request)) => {
                dom::set_scroll_lock(true);
                self.spawn_probe(request);
            }
            Some(Transition::Closed) => dom::set_scroll_lock(false),
            Some(Transition::Committed) => {}
            Some(Transition::Ignored(Ignored::IndexOutOfRange { index, len })) => {
                log::error!("No artwork at index {index} (catalog has {len})");
            }
            Some(Transition::Ignored(reason)) => {
                log::debug!("Modal event {event:?} ignored: {reason:?}");
            }
            None => {}
        }
    }

    fn spawn_probe(&self, request: ProbeRequest) {
        let controller = *self;
        spawn_local(async move {
            let loaded = image_probe::probe(&request.url).await;
            let event = if loaded {
                log::debug!("Image loaded successfully: {}", request.url);
                ModalEvent::ProbeLoaded(request.ticket)
            } else {
                log::warn!("Failed to load image: {}", request.url);
                ModalEvent::ProbeFailed(request.ticket)
            };
            controller.dispatch(event);
        });
    }

    fn mount_modal(&self) {
        if dom::first(MODAL_SELECTOR).is_some() {
            log::warn!("Gallery modal already present, not mounting a second one");
            return;
        }
        let controller = *self;
        leptos::mount::mount_to_body(move || view! { <GalleryModal controller=controller /> });
    }

    fn listen_escape(&self) {
        let Some(document) = dom::document() else {
            return;
        };
        let controller = *self;
        dom::listen(&document, "keydown", move |ev: Event| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key.key() == "Escape" && controller.is_open() {
                controller.dispatch(ModalEvent::Escape);
            }
        });
    }
}
