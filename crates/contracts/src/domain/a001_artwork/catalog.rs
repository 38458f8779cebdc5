//! Источники каталога работ.
//!
//! Контроллер галереи зависит только от [`ArtworkSource`]: сегодня это
//! встроенный список, завтра статический JSON или backend.

use super::aggregate::{Artwork, ArtworkId, Category};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use thiserror::Error;

/// Ошибка загрузки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate artwork id {0}")]
    DuplicateId(ArtworkId),

    #[error("artwork {id} is invalid: {reason}")]
    Invalid { id: ArtworkId, reason: String },
}

/// Поставщик упорядоченного списка работ
pub trait ArtworkSource {
    fn load(&self) -> Result<Vec<Artwork>, CatalogError>;
}

/// Демонстрационный каталог сайта
pub static SAMPLE_ARTWORKS: Lazy<Vec<Artwork>> = Lazy::new(|| {
    vec![
        Artwork::new(
            1,
            "Abstract Harmony",
            "images/artwork1.jpg",
            "A contemporary piece exploring color and form",
            Category::Digital,
        ),
        Artwork::new(
            2,
            "Urban Landscape",
            "images/artwork2.jpg",
            "Cityscape interpretation in mixed media",
            Category::Mixed,
        ),
        Artwork::new(
            3,
            "Natural Elements",
            "images/artwork3.jpg",
            "Organic forms in digital art",
            Category::Digital,
        ),
        Artwork::new(
            4,
            "Digital Dreams",
            "images/artwork4.jpg",
            "Digital art exploration",
            Category::Digital,
        ),
        Artwork::new(
            5,
            "Modern Expression",
            "images/artwork5.jpg",
            "Contemporary abstract expression",
            Category::Traditional,
        ),
    ]
});

/// Каталог, собранный в памяти
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    artworks: Vec<Artwork>,
}

impl StaticCatalog {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_ARTWORKS.clone())
    }
}

impl ArtworkSource for StaticCatalog {
    fn load(&self) -> Result<Vec<Artwork>, CatalogError> {
        validate_catalog(&self.artworks)?;
        Ok(self.artworks.clone())
    }
}

/// Каталог из JSON-массива записей (`[{ "id": 1, "title": ..., ... }]`)
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    raw: String,
}

impl JsonCatalog {
    pub fn from_json(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl ArtworkSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Artwork>, CatalogError> {
        let artworks: Vec<Artwork> = serde_json::from_str(&self.raw)?;
        validate_catalog(&artworks)?;
        Ok(artworks)
    }
}

/// Проверяет уникальность id и обязательные поля
pub fn validate_catalog(artworks: &[Artwork]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(artworks.len());
    for artwork in artworks {
        if !seen.insert(artwork.id) {
            return Err(CatalogError::DuplicateId(artwork.id));
        }
        artwork
            .validate()
            .map_err(|reason| CatalogError::Invalid {
                id: artwork.id,
                reason,
            })?;
    }
    Ok(())
}

/// Снимок каталога, которым владеет контроллер галереи.
///
/// Порядок вставки = порядок показа для фильтра "all". Снимок неизменяем.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<Artwork>,
}

impl Catalog {
    pub fn from_source(source: &dyn ArtworkSource) -> Result<Self, CatalogError> {
        Ok(Self {
            images: source.load()?,
        })
    }

    pub fn images(&self) -> &[Artwork] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.images.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_order() {
        let catalog = Catalog::from_source(&StaticCatalog::sample()).unwrap();
        let ids: Vec<i64> = catalog.images().iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.get(0).unwrap().title, "Abstract Harmony");
    }

    #[test]
    fn test_json_catalog_loads_in_order() {
        let raw = r#"[
            {"id": 10, "title": "B", "image": "images/b.jpg", "description": "", "category": "sculpture"},
            {"id": 3, "title": "A", "image": "images/a.jpg", "description": "d", "category": "digital"}
        ]"#;
        let catalog = Catalog::from_source(&JsonCatalog::from_json(raw)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.images()[0].id, ArtworkId(10));
        assert_eq!(catalog.images()[1].category, Category::Digital);
    }

    #[test]
    fn test_json_catalog_rejects_duplicates() {
        let raw = r#"[
            {"id": 1, "title": "A", "image": "a.jpg", "description": "", "category": "digital"},
            {"id": 1, "title": "B", "image": "b.jpg", "description": "", "category": "mixed"}
        ]"#;
        let err = JsonCatalog::from_json(raw).load().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ArtworkId(1))));
    }

    #[test]
    fn test_json_catalog_rejects_unknown_category() {
        let raw = r#"[{"id": 1, "title": "A", "image": "a.jpg", "description": "", "category": "pottery"}]"#;
        let err = JsonCatalog::from_json(raw).load().unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_static_catalog_rejects_blank_image() {
        let source = StaticCatalog::new(vec![Artwork::new(1, "A", " ", "", Category::Mixed)]);
        let err = source.load().unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { .. }));
        assert!(err.to_string().contains("artwork 1"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_source(&JsonCatalog::from_json("[]")).unwrap();
        assert!(catalog.is_empty());
    }
}
