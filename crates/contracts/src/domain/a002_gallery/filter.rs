use crate::domain::a001_artwork::{Artwork, ArtworkId, Category};

/// Служебное значение `data-filter`, означающее "без фильтра"
pub const ALL_FILTER: &str = "all";

/// Активный фильтр галереи
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Category(Category),
    /// Тег из разметки, которого нет в фиксированном наборе. Не совпадает ни с чем.
    Unknown(String),
}

impl GalleryFilter {
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_FILTER {
            return GalleryFilter::All;
        }
        match Category::from_tag(tag) {
            Some(category) => GalleryFilter::Category(category),
            None => GalleryFilter::Unknown(tag.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            GalleryFilter::All => ALL_FILTER,
            GalleryFilter::Category(c) => c.as_str(),
            GalleryFilter::Unknown(tag) => tag,
        }
    }

    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(c) => artwork.category == *c,
            GalleryFilter::Unknown(_) => false,
        }
    }
}

/// Работа в отфильтрованной проекции вместе с её индексом в полном каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedArtwork<'a> {
    pub catalog_index: usize,
    pub artwork: &'a Artwork,
}

/// Стабильная проекция каталога: порядок каталога сохраняется, каталог не меняется.
pub fn project<'a>(images: &'a [Artwork], filter: &GalleryFilter) -> Vec<ProjectedArtwork<'a>> {
    images
        .iter()
        .enumerate()
        .filter(|(_, artwork)| filter.matches(artwork))
        .map(|(catalog_index, artwork)| ProjectedArtwork {
            catalog_index,
            artwork,
        })
        .collect()
}

/// Данные одной карточки сетки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    /// Индекс в полном каталоге; по нему карточка открывает модальное окно
    pub catalog_index: usize,
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image: String,
}

impl From<ProjectedArtwork<'_>> for CardModel {
    fn from(p: ProjectedArtwork<'_>) -> Self {
        Self {
            catalog_index: p.catalog_index,
            id: p.artwork.id,
            title: p.artwork.title.clone(),
            description: p.artwork.description.clone(),
            category: p.artwork.category,
            image: p.artwork.image.clone(),
        }
    }
}

/// Полное содержимое контейнера сетки после рендера.
///
/// Рендер всегда заменяет содержимое целиком, поэтому повторный вызов с тем же
/// фильтром даёт то же значение.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridContent {
    Cards(Vec<CardModel>),
    Empty { message: String },
}

impl GridContent {
    pub fn build(images: &[Artwork], filter: &GalleryFilter, empty_message: &str) -> Self {
        let cards: Vec<CardModel> = project(images, filter)
            .into_iter()
            .map(CardModel::from)
            .collect();
        if cards.is_empty() {
            GridContent::Empty {
                message: empty_message.to_string(),
            }
        } else {
            GridContent::Cards(cards)
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            GridContent::Cards(cards) => cards.len(),
            GridContent::Empty { .. } => 0,
        }
    }
}

/// Состояние набора кнопок фильтра из разметки.
///
/// До первого нажатия активной кнопки нет и действует фильтр "all";
/// после нажатия активна ровно одна.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterBar {
    tags: Vec<String>,
    active: Option<usize>,
}

impl FilterBar {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags, active: None }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_active(&self, position: usize) -> bool {
        self.active == Some(position)
    }

    pub fn active_filter(&self) -> GalleryFilter {
        self.active
            .and_then(|i| self.tags.get(i))
            .map(|tag| GalleryFilter::from_tag(tag))
            .unwrap_or_default()
    }

    /// Делает кнопку активной и возвращает её фильтр
    pub fn activate(&mut self, position: usize) -> Option<GalleryFilter> {
        let tag = self.tags.get(position)?;
        let filter = GalleryFilter::from_tag(tag);
        self.active = Some(position);
        Some(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_artwork::catalog::SAMPLE_ARTWORKS;

    const EMPTY: &str = "No artworks found in this category.";

    fn titles(content: &GridContent) -> Vec<&str> {
        match content {
            GridContent::Cards(cards) => cards.iter().map(|c| c.title.as_str()).collect(),
            GridContent::Empty { .. } => Vec::new(),
        }
    }

    #[test]
    fn test_filter_from_tag() {
        assert_eq!(GalleryFilter::from_tag("all"), GalleryFilter::All);
        assert_eq!(
            GalleryFilter::from_tag("mixed"),
            GalleryFilter::Category(Category::Mixed)
        );
        assert_eq!(
            GalleryFilter::from_tag("ceramics"),
            GalleryFilter::Unknown("ceramics".to_string())
        );
        assert_eq!(GalleryFilter::from_tag("ceramics").as_tag(), "ceramics");
    }

    #[test]
    fn test_projection_matches_category_exactly() {
        let images = SAMPLE_ARTWORKS.as_slice();
        let filters = [
            GalleryFilter::All,
            GalleryFilter::Category(Category::Digital),
            GalleryFilter::Category(Category::Mixed),
            GalleryFilter::Category(Category::Traditional),
            GalleryFilter::Category(Category::Sculpture),
            GalleryFilter::Unknown("nope".into()),
        ];
        for filter in filters {
            let projected = project(images, &filter);
            let expected: Vec<usize> = images
                .iter()
                .enumerate()
                .filter(|(_, a)| match &filter {
                    GalleryFilter::All => true,
                    GalleryFilter::Category(c) => a.category == *c,
                    GalleryFilter::Unknown(_) => false,
                })
                .map(|(i, _)| i)
                .collect();
            let got: Vec<usize> = projected.iter().map(|p| p.catalog_index).collect();
            assert_eq!(got, expected, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_digital_filter_keeps_catalog_order() {
        let content = GridContent::build(
            &SAMPLE_ARTWORKS,
            &GalleryFilter::from_tag("digital"),
            EMPTY,
        );
        assert_eq!(content.card_count(), 3);
        assert_eq!(
            titles(&content),
            vec!["Abstract Harmony", "Natural Elements", "Digital Dreams"]
        );
        if let GridContent::Cards(cards) = &content {
            let indices: Vec<usize> = cards.iter().map(|c| c.catalog_index).collect();
            assert_eq!(indices, vec![0, 2, 3]);
        }
    }

    #[test]
    fn test_sculpture_filter_renders_empty_state() {
        let content = GridContent::build(
            &SAMPLE_ARTWORKS,
            &GalleryFilter::from_tag("sculpture"),
            EMPTY,
        );
        assert_eq!(content.card_count(), 0);
        assert_eq!(
            content,
            GridContent::Empty {
                message: EMPTY.to_string()
            }
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let filter = GalleryFilter::from_tag("mixed");
        let first = GridContent::build(&SAMPLE_ARTWORKS, &filter, EMPTY);
        let second = GridContent::build(&SAMPLE_ARTWORKS, &filter, EMPTY);
        assert_eq!(first, second);
        assert_eq!(second.card_count(), 1);
    }

    #[test]
    fn test_filtering_does_not_touch_catalog() {
        let before = SAMPLE_ARTWORKS.clone();
        let _ = GridContent::build(&SAMPLE_ARTWORKS, &GalleryFilter::from_tag("digital"), EMPTY);
        assert_eq!(*SAMPLE_ARTWORKS, before);
    }

    #[test]
    fn test_all_filter_on_empty_catalog() {
        let content = GridContent::build(&[], &GalleryFilter::All, EMPTY);
        assert!(matches!(content, GridContent::Empty { .. }));
    }

    #[test]
    fn test_filter_bar_single_active() {
        let mut bar = FilterBar::new(vec![
            "all".into(),
            "digital".into(),
            "mixed".into(),
            "sculpture".into(),
        ]);
        assert!((0..bar.len()).all(|i| !bar.is_active(i)));
        assert_eq!(bar.active_filter(), GalleryFilter::All);

        assert_eq!(
            bar.activate(1),
            Some(GalleryFilter::Category(Category::Digital))
        );
        assert_eq!((0..bar.len()).filter(|&i| bar.is_active(i)).count(), 1);

        bar.activate(3);
        assert!(bar.is_active(3));
        assert!(!bar.is_active(1));
        assert_eq!((0..bar.len()).filter(|&i| bar.is_active(i)).count(), 1);
        assert_eq!(
            bar.active_filter(),
            GalleryFilter::Category(Category::Sculpture)
        );

        assert_eq!(bar.activate(9), None);
        assert!(bar.is_active(3));
    }
}
