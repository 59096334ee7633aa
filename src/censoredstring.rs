use std::convert::AsRef;
use std::fmt;

pub static CENSOR_STRING: &str = "***REMOVED***";

/// Personal data that must not reach logs in clear.
/// `Debug` and `Display` print `representation`, never the data itself.
#[derive(Clone, PartialEq, Eq)]
pub struct CensoredString {
    data: String,
    pub representation: String,
}

impl CensoredString {
    /// Keeps the domain visible so that delivery problems can still be triaged,
    /// e.g. `jo@x.com` is represented as `***REMOVED***@x.com`.
    pub fn email(address: &str) -> Self {
        let representation = match address.rsplit_once('@') {
            Some((_, domain)) if !domain.is_empty() => format!("{}@{}", CENSOR_STRING, domain),
            _ => CENSOR_STRING.to_owned(),
        };
        Self {
            data: address.to_owned(),
            representation,
        }
    }

    /// Only reveals how much text was typed.
    pub fn length_only(text: &str) -> Self {
        Self {
            data: text.to_owned(),
            representation: format!("{} ({} chars)", CENSOR_STRING, text.chars().count()),
        }
    }
}

impl AsRef<str> for CensoredString {
    fn as_ref(&self) -> &str {
        &self.data
    }
}

impl From<String> for CensoredString {
    fn from(src: String) -> Self {
        Self {
            data: src,
            representation: CENSOR_STRING.to_owned(),
        }
    }
}

impl fmt::Debug for CensoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.representation, f)
    }
}

impl fmt::Display for CensoredString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.representation, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{CensoredString, CENSOR_STRING};

    #[test]
    fn display_hides_data() {
        let secret = CensoredString::from("555-0100".to_owned());
        assert_eq!(CENSOR_STRING, secret.to_string());
        assert_eq!("555-0100", secret.as_ref());
    }

    #[test]
    fn email_keeps_only_domain() {
        let email = CensoredString::email("jo@x.com");
        assert_eq!("***REMOVED***@x.com", email.to_string());
        assert_eq!("jo@x.com", email.as_ref());
    }

    #[test]
    fn email_without_domain_is_fully_censored() {
        assert_eq!(CENSOR_STRING, CensoredString::email("not-an-email").to_string());
        assert_eq!(CENSOR_STRING, CensoredString::email("trailing@").to_string());
    }

    #[test]
    fn length_only_counts_characters() {
        let message = CensoredString::length_only("héllo");
        assert_eq!("***REMOVED*** (5 chars)", message.to_string());
    }
}
