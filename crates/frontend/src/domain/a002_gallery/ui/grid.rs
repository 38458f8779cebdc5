use super::ArtCard;
use crate::domain::a002_gallery::GalleryController;
use contracts::domain::a002_gallery::GridContent;
use leptos::prelude::*;

/// Contents of the portfolio grid container.
///
/// Every filter change rebuilds the whole list, nothing accumulates between renders.
#[component]
pub fn GalleryGrid(controller: GalleryController) -> impl IntoView {
    let placeholder = controller.placeholder_image();
    let on_open = Callback::new(move |index: usize| controller.open_modal(index));

    view! {
        {move || match controller.grid_content() {
            GridContent::Empty { message } => view! {
                <div class="col-span-full text-center text-gray-400 py-8">{message}</div>
            }
            .into_any(),
            GridContent::Cards(cards) => cards
                .into_iter()
                .map(|card| {
                    view! { <ArtCard card=card placeholder=placeholder.clone() on_open=on_open /> }
                })
                .collect_view()
                .into_any(),
        }}
    }
}
