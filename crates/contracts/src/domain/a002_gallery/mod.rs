pub mod filter;
pub mod modal;
pub mod thumbnail;

pub use filter::{project, CardModel, FilterBar, GalleryFilter, GridContent, ProjectedArtwork, ALL_FILTER};
pub use modal::{
    Ignored, ModalEvent, ModalMachine, ModalState, ModalTexts, ModalView, ProbeRequest,
    ProbeTicket, Transition,
};
pub use thumbnail::{ThumbnailAction, ThumbnailState};
