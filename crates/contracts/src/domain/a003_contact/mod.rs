pub mod validation;

pub use validation::{
    is_valid_email, ContactField, ContactRules, ContactSubmission, FieldCheck, ValidationReport,
    ERROR_CLASS, ERROR_FOR_ATTR,
};
