#![no_main]
extern crate contact_form_rs;

use contact_form_rs::form::{
    is_valid_email, validate, FieldName, FormFields, ValidationError, ValidationResult,
};
use libfuzzer_sys::fuzz_target;

// ECMAScript `\s`, the whitespace the email pattern rejects
fn is_email_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// Split the input on NUL bytes into the four form fields, in display order
fn fields_from(data: &str) -> FormFields {
    let mut fields = FormFields::default();
    for (field, value) in FieldName::ALL.iter().zip(data.splitn(4, '\0')) {
        fields.set(*field, value.to_owned());
    }
    fields
}

fuzz_target!(|data: &[u8]| {
    let Ok(data) = std::str::from_utf8(data) else {
        return;
    };
    let fields = fields_from(data);
    let any_empty = FieldName::ALL.iter().any(|field| fields.get(*field).is_empty());
    match validate(&fields) {
        ValidationResult::Invalid(ValidationError::MissingFields) => assert!(any_empty),
        ValidationResult::Invalid(ValidationError::InvalidEmail) => {
            assert!(!any_empty);
            assert!(!is_valid_email(&fields.email));
        }
        ValidationResult::Valid => {
            assert!(!any_empty);
            let (local, domain) = fields.email.split_once('@').expect("valid email has '@'");
            assert!(!local.is_empty());
            assert!(!domain.contains('@'));
            let inner_dot = domain
                .char_indices()
                .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len());
            assert!(inner_dot);
            assert!(!fields.email.chars().any(is_email_whitespace));
        }
    }
});
