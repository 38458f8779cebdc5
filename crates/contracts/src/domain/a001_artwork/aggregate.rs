use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный и стабильный идентификатор работы в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub i64);

impl ArtworkId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Фиксированный набор тегов, по которым фильтруется галерея
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Digital,
    Mixed,
    Traditional,
    Sculpture,
    Photography,
}

impl Category {
    /// Тег в том виде, в каком он лежит в разметке (`data-filter`) и в JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Digital => "digital",
            Category::Mixed => "mixed",
            Category::Traditional => "traditional",
            Category::Sculpture => "sculpture",
            Category::Photography => "photography",
        }
    }

    /// Точное сравнение с тегом, без нормализации регистра.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_str() == tag)
    }

    pub fn all() -> [Category; 5] {
        [
            Category::Digital,
            Category::Mixed,
            Category::Traditional,
            Category::Sculpture,
            Category::Photography,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Работа в портфолио. Создаётся один раз при загрузке каталога и дальше не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    /// Относительный путь или URL изображения (`images/artworkN.jpg`)
    pub image: String,
    pub description: String,
    pub category: Category,
}

impl Artwork {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: ArtworkId::new(id),
            title: title.into(),
            image: image.into(),
            description: description.into(),
            category,
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".into());
        }
        if self.image.trim().is_empty() {
            return Err("image path must not be empty".into());
        }
        Ok(())
    }
}
