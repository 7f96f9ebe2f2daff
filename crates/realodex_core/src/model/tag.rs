//! Client role tag.
//!
//! # Invariants
//! - Tag values are stored lowercase, so a `BTreeSet<Tag>` dedups
//!   case-insensitively.
//! - Only `buyer` and `seller` are accepted.

use crate::model::constraint::ConstraintViolation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

const SUPPORTED_TAGS: &[&str] = &["buyer", "seller"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Tags should be either buyer or seller (case insensitive)";

    pub fn new(value: &str) -> Result<Self, ConstraintViolation> {
        let normalized = value.trim().to_ascii_lowercase();
        if !SUPPORTED_TAGS.contains(&normalized.as_str()) {
            return Err(ConstraintViolation::new("tag", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(normalized))
    }

    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.as_str())
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders a tag set as `[buyer][seller]`.
pub fn format_tags(tags: &BTreeSet<Tag>) -> String {
    tags.iter().map(|tag| format!("[{tag}]")).collect()
}

#[cfg(test)]
mod tests {
    use super::{format_tags, Tag};
    use std::collections::BTreeSet;

    #[test]
    fn tag_normalizes_case() {
        assert_eq!(Tag::new("BUYER").unwrap().as_str(), "buyer");
        assert_eq!(Tag::new(" Seller ").unwrap(), Tag::new("seller").unwrap());
    }

    #[test]
    fn tag_rejects_unknown_roles() {
        for raw in ["customer", "", "Buyer$", "buyers"] {
            let err = Tag::new(raw).unwrap_err();
            assert_eq!(err.message, Tag::MESSAGE_CONSTRAINTS);
        }
    }

    #[test]
    fn tag_set_dedups_case_insensitively() {
        let tags: BTreeSet<Tag> = ["Buyer", "buyer", "SELLER"]
            .iter()
            .map(|raw| Tag::new(raw).unwrap())
            .collect();
        assert_eq!(tags.len(), 2);
        assert_eq!(format_tags(&tags), "[buyer][seller]");
    }
}
