//! Household value objects: income, family size and housing type.
//!
//! # Invariants
//! - `Income` and `Family` keep canonical decimal text (no sign, no leading
//!   zeros), so `to_string()` returns exactly the accepted input.
//! - Non-numeric and non-positive family sizes fail with the same message.

use crate::model::constraint::ConstraintViolation;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static INCOME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("valid income regex"));
static FAMILY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("valid family regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Yearly income in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct Income(u64);

impl Income {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Income should be a non-negative integer";

    pub fn new(value: &str) -> Result<Self, ConstraintViolation> {
        if !Self::is_valid(value) {
            return Err(Self::violation());
        }
        value.parse::<u64>().map(Self).map_err(|_| Self::violation())
    }

    pub fn is_valid(value: &str) -> bool {
        INCOME_RE.is_match(value) && value.parse::<u64>().is_ok()
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn representation(&self) -> String {
        format!("Income: ${}", self.0)
    }

    fn violation() -> ConstraintViolation {
        ConstraintViolation::new("income", Self::MESSAGE_CONSTRAINTS)
    }
}

impl From<u64> for Income {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Income> for u64 {
    fn from(value: Income) -> Self {
        value.0
    }
}

impl Display for Income {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Family size, counting the person themself. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Family(u32);

impl Family {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Family size should be a positive integer";

    pub fn new(value: &str) -> Result<Self, ConstraintViolation> {
        if !Self::is_valid(value) {
            return Err(Self::violation());
        }
        value.parse::<u32>().map(Self).map_err(|_| Self::violation())
    }

    /// Rejects non-numeric, zero, negative and out-of-range input alike.
    pub fn is_valid(value: &str) -> bool {
        FAMILY_RE.is_match(value) && value.parse::<u32>().is_ok()
    }

    pub fn size(&self) -> u32 {
        self.0
    }

    pub fn representation(&self) -> String {
        format!("Family size is {}", self.0)
    }

    fn violation() -> ConstraintViolation {
        ConstraintViolation::new("family", Self::MESSAGE_CONSTRAINTS)
    }
}

impl TryFrom<u32> for Family {
    type Error = ConstraintViolation;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(Self::violation());
        }
        Ok(Self(value))
    }
}

impl From<Family> for u32 {
    fn from(value: Family) -> Self {
        value.0
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preferred housing type of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HousingType {
    Hdb,
    Condominium,
    LandedProperty,
    GoodClassBungalow,
}

impl HousingType {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Housing type must be HDB, CONDOMINIUM, LANDED PROPERTY or GOOD CLASS BUNGALOW";

    /// Accepts canonical names and short aliases, ignoring case and
    /// repeated inner whitespace.
    pub fn new(value: &str) -> Result<Self, ConstraintViolation> {
        let normalized = WHITESPACE_RE
            .replace_all(value.trim(), " ")
            .to_ascii_uppercase();
        match normalized.as_str() {
            "HDB" => Ok(Self::Hdb),
            "CONDOMINIUM" | "CONDO" => Ok(Self::Condominium),
            "LANDED PROPERTY" | "LANDED" => Ok(Self::LandedProperty),
            "GOOD CLASS BUNGALOW" | "GCB" => Ok(Self::GoodClassBungalow),
            _ => Err(ConstraintViolation::new(
                "housing_type",
                Self::MESSAGE_CONSTRAINTS,
            )),
        }
    }

    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hdb => "HDB",
            Self::Condominium => "CONDOMINIUM",
            Self::LandedProperty => "LANDED PROPERTY",
            Self::GoodClassBungalow => "GOOD CLASS BUNGALOW",
        }
    }

    pub fn representation(&self) -> String {
        format!("Housing type: {}", self.as_str())
    }
}

impl TryFrom<String> for HousingType {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.as_str())
    }
}

impl From<HousingType> for String {
    fn from(value: HousingType) -> Self {
        value.as_str().to_string()
    }
}

impl Display for HousingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
