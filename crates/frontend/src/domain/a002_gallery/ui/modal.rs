use crate::domain::a002_gallery::GalleryController;
use leptos::ev;
use leptos::prelude::*;

const MODAL_CLASS: &str = "gallery-modal fixed inset-0 z-50 overflow-auto";
const MODAL_CLASS_HIDDEN: &str = "gallery-modal hidden fixed inset-0 z-50 overflow-auto";

/// Single shared viewer overlay, mounted once into `<body>`.
#[component]
pub fn GalleryModal(controller: GalleryController) -> impl IntoView {
    let modal = Memo::new(move |_| controller.modal_view());

    // Clicks outside the content panel reach the overlay and close it.
    let handle_overlay_click = move |_| {
        controller.close_from_overlay();
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        controller.close_modal();
    };

    view! {
        <div
            class=move || if modal.with(|m| m.visible) { MODAL_CLASS } else { MODAL_CLASS_HIDDEN }
            role="dialog"
            aria-modal="true"
            on:click=handle_overlay_click
        >
            <div class="fixed inset-0 bg-black bg-opacity-75 transition-opacity"></div>
            <div class="fixed inset-0 z-10 flex items-center justify-center p-4">
                <div
                    class="relative bg-gray-900 rounded-lg shadow-xl max-w-5xl w-full mx-auto"
                    on:click=stop_propagation
                >
                    <button
                        class="gallery-modal-close absolute -top-4 -right-4 bg-gray-800 text-white w-8 h-8 rounded-full flex items-center justify-center hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-600 z-20"
                        aria-label="Close"
                        on:click=handle_close
                    >
                        <span class="sr-only">"Close"</span>
                        <svg class="w-4 h-4" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </button>

                    <div class="relative">
                        <div class="flex items-center justify-center min-h-[200px] max-h-[80vh]">
                            <img
                                src=move || modal.with(|m| m.image_src.clone())
                                alt=move || modal.with(|m| m.image_alt.clone())
                                style=move || modal.with(|m| m.image_style)
                                class="max-w-full max-h-[70vh] object-contain"
                            />
                        </div>
                        <div class="p-4 bg-gray-900">
                            <h3 class="modal-title text-xl font-semibold text-white mb-2">
                                {move || modal.with(|m| m.title.clone())}
                            </h3>
                            <p class="modal-desc text-gray-300">
                                {move || modal.with(|m| m.description.clone())}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
