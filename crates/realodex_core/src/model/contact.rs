//! Contact value objects: name, phone, email and address.
//!
//! # Responsibility
//! - Wrap raw strings into validated, immutable values.
//! - Expose each field's validity predicate and constraint message.
//!
//! # Invariants
//! - A constructed value always satisfies its `is_valid` predicate.
//! - Deserialization goes through the same constructor (`try_from`).

use crate::model::constraint::ConstraintViolation;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9 ]*[A-Za-z0-9])?$").expect("valid name regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});

/// Person name. Also the identity key for "same person" checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn new(value: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ConstraintViolation::new("name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    /// First and last characters must be alphanumeric, so blank or padded
    /// input never matches.
    pub fn is_valid(value: &str) -> bool {
        NAME_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn new(value: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ConstraintViolation::new("phone", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    pub fn is_valid(value: &str) -> bool {
        PHONE_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address in `local-part@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn new(value: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ConstraintViolation::new("email", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    pub fn is_valid(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form postal address. Must not be blank or padded with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn new(value: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ConstraintViolation::new(
                "address",
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(value))
    }

    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.trim() == value
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_value_conversions {
    ($($ty:ident),+) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ConstraintViolation;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )+
    };
}

string_value_conversions!(Name, Phone, Email, Address);

#[cfg(test)]
mod tests {
    use super::{Address, Email, Name, Phone};

    #[test]
    fn name_accepts_alphanumeric_with_spaces() {
        assert!(Name::is_valid("peter jack"));
        assert!(Name::is_valid("12345"));
        assert!(Name::is_valid("Capital Tan 2nd"));
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid(" leading"));
        assert!(!Name::is_valid("trailing "));
        assert!(!Name::is_valid("#$@%^"));
        let err = Name::new("peter*").unwrap_err();
        assert_eq!(err.message, Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("9312 1534"));
        assert!(!Phone::is_valid("phone"));
    }

    #[test]
    fn email_checks_local_part_and_domain() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("a1+be.d@example1.co"));
        assert!(Email::is_valid("peter_jack@very-very-long-domain.com"));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("peterjack@"));
        assert!(!Email::is_valid("peterjack@example.c"));
        assert!(!Email::is_valid("-peterjack@example.com"));
        assert!(!Email::is_valid("peterjack@-example.com"));
        assert!(!Email::is_valid("peter jack@example.com"));
    }

    #[test]
    fn address_rejects_blank() {
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid("   "));
        assert!(!Address::is_valid("Den Road "));
        assert!(!Address::is_valid(" Den Road"));
    }

    #[test]
    fn serde_rejects_invalid_name() {
        let err = serde_json::from_str::<Name>("\"bad*name\"").unwrap_err();
        assert!(err.to_string().contains("alphanumeric"));
    }
}
