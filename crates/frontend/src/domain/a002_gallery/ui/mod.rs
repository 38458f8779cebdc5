pub mod card;
pub mod grid;
pub mod modal;

pub use card::ArtCard;
pub use grid::GalleryGrid;
pub use modal::GalleryModal;
