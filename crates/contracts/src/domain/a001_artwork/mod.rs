pub mod aggregate;
pub mod catalog;

pub use aggregate::{Artwork, ArtworkId, Category};
pub use catalog::{ArtworkSource, Catalog, CatalogError, JsonCatalog, StaticCatalog};
