use crate::censoredstring::CensoredString;
use std::fmt;
use std::str::FromStr;

/// The four values typed by the user. Serialized as-is into the request body.
#[derive(Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Phone => self.phone = value,
            FieldName::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

impl fmt::Debug for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFields")
            .field("name", &self.name)
            .field("email", &CensoredString::email(&self.email))
            .field("phone", &CensoredString::from(self.phone.clone()))
            .field("message", &CensoredString::length_only(&self.message))
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldName {
    /// Display order of the inputs.
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::Name => "Your Name",
            FieldName::Email => "Your Email (Required)",
            FieldName::Phone => "Your Phone",
            FieldName::Message => "Your Message",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown form field '{0}', expected one of name, email, phone, message")]
pub struct FieldNameError(pub String);

impl FromStr for FieldName {
    type Err = FieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "phone" => Ok(FieldName::Phone),
            "message" => Ok(FieldName::Message),
            other => Err(FieldNameError(other.to_owned())),
        }
    }
}

impl fmt::Display for FieldName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldName, FormFields};
    use claims::{assert_err, assert_ok_eq};
    use std::str::FromStr;

    #[test]
    fn field_names_round_trip_through_display() {
        for field in FieldName::ALL {
            assert_ok_eq!(FieldName::from_str(&field.to_string()), field);
        }
    }

    #[test]
    fn field_name_is_case_sensitive() {
        assert_err!(FieldName::from_str("Email"));
        assert_err!(FieldName::from_str("subject"));
    }

    #[test]
    fn payload_has_exactly_the_four_keys() {
        let fields = FormFields {
            name: "Jo".to_owned(),
            email: "jo@x.com".to_owned(),
            phone: "123".to_owned(),
            message: "hi".to_owned(),
        };
        let payload = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "phone": "123",
                "message": "hi",
            }),
            payload
        );
    }

    #[test]
    fn debug_does_not_leak_contact_details() {
        let fields = FormFields {
            name: "Jo".to_owned(),
            email: "jo@x.com".to_owned(),
            phone: "555-0100".to_owned(),
            message: "call me back".to_owned(),
        };
        let debug = format!("{:?}", fields);
        assert!(debug.contains("x.com"));
        assert!(!debug.contains("jo@"));
        assert!(!debug.contains("555-0100"));
        assert!(!debug.contains("call me back"));
    }

    #[test]
    fn default_is_all_empty() {
        assert!(FormFields::default().is_empty());
    }
}
