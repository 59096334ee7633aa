mod form_fields;
mod form_state;
mod form_validator;

pub use form_fields::FieldName;
pub use form_fields::FieldNameError;
pub use form_fields::FormFields;
pub use form_state::FormState;
pub use form_state::SubmissionStatus;
pub use form_validator::is_valid_email;
pub use form_validator::validate;
pub use form_validator::ValidationError;
pub use form_validator::ValidationResult;
