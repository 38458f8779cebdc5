pub mod a001_artwork;
pub mod a002_gallery;
pub mod a003_contact;
