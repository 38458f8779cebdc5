//! Правила формы обратной связи.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Email,
    Message,
}

/// Класс блока с ошибкой под полем
pub const ERROR_CLASS: &str = "form-error";
/// Атрибут, привязывающий блок с ошибкой к своему полю
pub const ERROR_FOR_ATTR: &str = "data-error-for";

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Селектор блока с ошибкой именно этого поля.
    pub fn error_selector(&self) -> String {
        format!(".{ERROR_CLASS}[{ERROR_FOR_ATTR}=\"{}\"]", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRules {
    pub min_message_len: usize,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self { min_message_len: 10 }
    }
}

pub const EMAIL_ERROR: &str = "Please enter a valid email address";

/// Результат проверки одного поля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: ContactField,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub checks: Vec<FieldCheck>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.error.is_none())
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.checks
            .iter()
            .find(|c| c.field == field)
            .and_then(|c| c.error.as_deref())
    }
}

impl ContactRules {
    pub fn message_error(&self) -> String {
        format!(
            "Message must be at least {} characters long",
            self.min_message_len
        )
    }

    /// Проверяет только те поля, которые есть в форме (`None` = поля нет).
    pub fn validate(&self, email: Option<&str>, message: Option<&str>) -> ValidationReport {
        let mut checks = Vec::with_capacity(2);

        if let Some(email) = email {
            checks.push(FieldCheck {
                field: ContactField::Email,
                error: (!is_valid_email(email)).then(|| EMAIL_ERROR.to_string()),
            });
        }

        if let Some(message) = message {
            // длина в UTF-16 единицах, как у `String.length` в браузере
            let too_short = message.trim().encode_utf16().count() < self.min_message_len;
            checks.push(FieldCheck {
                field: ContactField::Message,
                error: too_short.then(|| self.message_error()),
            });
        }

        ValidationReport { checks }
    }
}

/// Запись об отправленной форме. Сервера нет, поэтому она только логируется.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub fields: BTreeMap<String, String>,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            submitted_at: Utc::now(),
        }
    }

    pub fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("artist@example.com"));
        assert!(is_valid_email("a.b+c@studio.co.uk"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("artist@example"));
        assert!(!is_valid_email("artist example@mail.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@@example.com"));
    }

    #[test]
    fn test_message_length_is_trimmed() {
        let rules = ContactRules::default();
        let report = rules.validate(None, Some("   short    "));
        assert_eq!(
            report.error_for(ContactField::Message),
            Some("Message must be at least 10 characters long")
        );

        let report = rules.validate(None, Some("  exactly10!  "));
        assert!(report.is_valid());
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        let rules = ContactRules::default();
        // each emoji is a surrogate pair, five of them make ten units
        assert!(rules.validate(None, Some("😀😀😀😀😀")).is_valid());
        assert!(!rules.validate(None, Some("😀😀😀😀")).is_valid());
        assert!(rules.validate(None, Some("ёжик в тум")).is_valid());
    }

    #[test]
    fn test_validate_reports_each_present_field() {
        let rules = ContactRules::default();
        let report = rules.validate(Some("nope"), Some("hi"));
        assert!(!report.is_valid());
        assert_eq!(report.checks.len(), 2);
        assert_eq!(report.error_for(ContactField::Email), Some(EMAIL_ERROR));

        let report = rules.validate(Some("me@site.org"), Some("I would like a commission"));
        assert!(report.is_valid());
        assert_eq!(report.error_for(ContactField::Email), None);
    }

    #[test]
    fn test_error_selectors_are_per_field() {
        assert_eq!(
            ContactField::Email.error_selector(),
            ".form-error[data-error-for=\"email\"]"
        );
        assert_eq!(
            ContactField::Message.error_selector(),
            ".form-error[data-error-for=\"message\"]"
        );
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let report = ContactRules::default().validate(None, None);
        assert!(report.checks.is_empty());
        assert!(report.is_valid());
    }

    #[test]
    fn test_custom_min_length() {
        let rules = ContactRules { min_message_len: 3 };
        assert!(rules.validate(None, Some("hey")).is_valid());
        assert_eq!(rules.message_error(), "Message must be at least 3 characters long");
    }

    #[test]
    fn test_submission_log_line() {
        let submission = ContactSubmission::new(vec![
            ("name".to_string(), "Ada".to_string()),
            ("email".to_string(), "ada@example.com".to_string()),
        ]);
        let line = submission.to_log_line();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["fields"]["name"], "Ada");
        assert!(value["submitted_at"].is_string());
    }
}
