use crate::form::form_fields::{FieldName, FormFields};
use once_cell::sync::Lazy;
use regex::Regex;

// ECMAScript `\s`: includes U+FEFF, excludes U+0085, unlike Unicode White_Space.
const EMAIL_WHITESPACE: &str = concat!(
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

// Something before '@', something after it, and a '.' followed by at least one character.
// Whitespace and additional '@' are rejected anywhere.
static EMAIL_FORMAT: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", EMAIL_WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$", part = part)).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields must be filled out to submit the form.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

impl From<ValidationResult> for Result<(), ValidationError> {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(error) => Err(error),
        }
    }
}

/// Syntactic check run before any network attempt. The first failing rule wins.
/// Values are not trimmed: a single space counts as filled out.
pub fn validate(fields: &FormFields) -> ValidationResult {
    if FieldName::ALL
        .iter()
        .any(|field| fields.get(*field).is_empty())
    {
        return ValidationResult::Invalid(ValidationError::MissingFields);
    }
    if !is_valid_email(&fields.email) {
        return ValidationResult::Invalid(ValidationError::InvalidEmail);
    }
    ValidationResult::Valid
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
}
