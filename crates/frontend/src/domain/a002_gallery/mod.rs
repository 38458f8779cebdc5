pub mod controller;
pub mod ui;

pub use controller::GalleryController;
