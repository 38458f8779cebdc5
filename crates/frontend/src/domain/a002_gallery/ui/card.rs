use contracts::domain::a002_gallery::{CardModel, ThumbnailAction, ThumbnailState};
use leptos::prelude::*;

#[component]
pub fn ArtCard(
    card: CardModel,
    /// Image shown once the thumbnail fails to load
    placeholder: String,
    /// Receives the card's index in the full catalog
    on_open: Callback<usize>,
) -> impl IntoView {
    let CardModel {
        catalog_index,
        title,
        description,
        category,
        image,
        ..
    } = card;
    let thumb = RwSignal::new(ThumbnailState::new(image.clone(), placeholder));

    // Swaps to the placeholder once; a failing placeholder is left alone.
    let on_error = move |_| {
        if let Some(ThumbnailAction::UsePlaceholder { failed, .. }) =
            thumb.try_update(ThumbnailState::on_error)
        {
            log::error!("Failed to load image: {failed}");
        }
    };

    let on_load = {
        let image = image.clone();
        move |_| {
            if !thumb.with_untracked(|t| t.showing_placeholder()) {
                log::debug!("Successfully loaded image: {image}");
            }
        }
    };

    let on_click = move |_| {
        if thumb.with_untracked(|t| t.showing_placeholder()) {
            log::warn!("Original image failed to load: {image}");
        }
        on_open.run(catalog_index);
    };

    view! {
        <div class="art-card animate-fade-in">
            <img
                src=move || thumb.with(|t| t.src().to_string())
                alt=title.clone()
                class="cursor-pointer w-full h-64 object-cover"
                on:error=on_error
                on:load=on_load
                on:click=on_click
            />
            <div class="art-card-content">
                <h3 class="art-card-title">{title}</h3>
                <p class="art-card-description">{description}</p>
                <span class="text-sm text-gray-400 mt-2 capitalize">{category.as_str()}</span>
            </div>
        </div>
    }
}
