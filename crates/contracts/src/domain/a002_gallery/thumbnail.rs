/// Источник картинки миниатюры с однократной подменой на заглушку.
///
/// После первой ошибки загрузки показывается заглушка; ошибка самой заглушки
/// игнорируется, чтобы не зациклиться.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailState {
    original: String,
    placeholder: String,
    fallback_applied: bool,
}

/// Что сделать с `<img>` после события `error`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailAction {
    /// Поставить заглушку вместо `original`
    UsePlaceholder { failed: String, placeholder: String },
    /// Обработчик уже сработал
    Ignore,
}

impl ThumbnailState {
    pub fn new(original: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            placeholder: placeholder.into(),
            fallback_applied: false,
        }
    }

    pub fn src(&self) -> &str {
        if self.fallback_applied {
            &self.placeholder
        } else {
            &self.original
        }
    }

    pub fn showing_placeholder(&self) -> bool {
        self.fallback_applied
    }

    pub fn on_error(&mut self) -> ThumbnailAction {
        if self.fallback_applied {
            return ThumbnailAction::Ignore;
        }
        self.fallback_applied = true;
        ThumbnailAction::UsePlaceholder {
            failed: self.original.clone(),
            placeholder: self.placeholder.clone(),
        }
    }
}
