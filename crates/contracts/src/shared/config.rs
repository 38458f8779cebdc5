//! Конфигурация страницы.
//!
//! Значения по умолчанию зашиты в код. Хост-страница может переопределить
//! любую часть через JSON в `<script type="application/json" id="site-config">`;
//! отсутствующие ключи берутся из умолчаний.

use crate::domain::a002_gallery::ModalTexts;
use crate::domain::a003_contact::ContactRules;
use serde::Deserialize;
use thiserror::Error;

/// id элемента с JSON-переопределениями
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub gallery: GalleryConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub grid_id: String,
    pub filter_selector: String,
    pub active_filter_classes: Vec<String>,
    pub placeholder_image: String,
    pub empty_message: String,
    pub loading_title: String,
    pub error_title: String,
    pub error_description: String,
    pub error_alt: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            grid_id: "portfolio-grid".into(),
            filter_selector: ".filter-btn".into(),
            active_filter_classes: vec!["active".into(), "bg-blue-600".into()],
            placeholder_image: "images/placeholder.jpg".into(),
            empty_message: "No artworks found in this category.".into(),
            loading_title: "Loading...".into(),
            error_title: "Error Loading Image".into(),
            error_description: "The image could not be loaded. Please try again later.".into(),
            error_alt: "Image failed to load".into(),
        }
    }
}

impl GalleryConfig {
    pub fn modal_texts(&self) -> ModalTexts {
        ModalTexts {
            loading_title: self.loading_title.clone(),
            error_title: self.error_title.clone(),
            error_description: self.error_description.clone(),
            error_alt: self.error_alt.clone(),
            placeholder_image: self.placeholder_image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub debounce_ms: u32,
    pub min_message_len: usize,
    pub success_message: String,
    pub success_message_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".into(),
            debounce_ms: 300,
            min_message_len: 10,
            success_message: "Thank you for your message! We will get back to you soon.".into(),
            success_message_ms: 5000,
        }
    }
}

impl ContactConfig {
    pub fn rules(&self) -> ContactRules {
        ContactRules {
            min_message_len: self.min_message_len,
        }
    }
}

/// Загрузка конфигурации
///
/// `None` или пустая строка дают умолчания.
pub fn load_config(overrides: Option<&str>) -> Result<SiteConfig, ConfigError> {
    match overrides.map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(raw)?),
        _ => Ok(SiteConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = load_config(None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.gallery.grid_id, "portfolio-grid");
        assert_eq!(config.gallery.placeholder_image, "images/placeholder.jpg");
        assert_eq!(config.contact.debounce_ms, 300);
        assert_eq!(config.contact.success_message_ms, 5000);

        assert_eq!(load_config(Some("   ")).unwrap(), SiteConfig::default());
        assert_eq!(load_config(Some("{}")).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override_merges_with_defaults() {
        let raw = r#"{ "gallery": { "grid_id": "works" }, "contact": { "debounce_ms": 150 } }"#;
        let config = load_config(Some(raw)).unwrap();
        assert_eq!(config.gallery.grid_id, "works");
        assert_eq!(config.gallery.filter_selector, ".filter-btn");
        assert_eq!(config.contact.debounce_ms, 150);
        assert_eq!(config.contact.min_message_len, 10);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = load_config(Some("{ gallery: ")).unwrap_err();
        assert!(err.to_string().starts_with("site config is not valid JSON"));
    }

    #[test]
    fn test_modal_texts_follow_config() {
        let mut gallery = GalleryConfig::default();
        gallery.error_title = "Oops".into();
        let texts = gallery.modal_texts();
        assert_eq!(texts.error_title, "Oops");
        assert_eq!(texts.loading_title, "Loading...");
    }
}
