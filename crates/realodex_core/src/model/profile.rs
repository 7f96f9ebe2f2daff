//! Profile value objects: remark and birthday.
//!
//! # Invariants
//! - `Birthday` always holds a real calendar date (leap years respected).
//! - `Remark` is trimmed; an empty remark means "no remark".
//! - Calendar months are `chrono::Month`; parsing accepts full or
//!   three-letter names, ignoring case.

use crate::model::constraint::ConstraintViolation;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub use chrono::Month;

static BIRTHDAY_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}(?P<month>[A-Za-z]{3})[0-9]{4}$").expect("valid birthday regex")
});

const BIRTHDAY_FORMAT: &str = "%d%b%Y";

/// Free-text note attached to a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Remark(String);

impl Remark {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Remarks can take any values";

    pub fn new(value: impl AsRef<str>) -> Result<Self, ConstraintViolation> {
        let trimmed = value.as_ref().trim();
        if !Self::is_valid(trimmed) {
            return Err(ConstraintViolation::new("remark", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Every text is a valid remark, including the empty one.
    pub fn is_valid(_value: &str) -> bool {
        true
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn representation(&self) -> String {
        if self.is_empty() {
            "No remark.".to_string()
        } else {
            format!("Remark: {}", self.0)
        }
    }
}

impl TryFrom<String> for Remark {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Remark> for String {
    fn from(value: Remark) -> Self {
        value.0
    }
}

impl Display for Remark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Date of birth in `ddMMMyyyy` form, e.g. `01May2009`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    date: NaiveDate,
    month: Month,
}

impl Birthday {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Birthday should be a valid date in the format ddMMMyyyy, e.g. 01May2009";
    pub const MESSAGE_MONTH_CONSTRAINTS: &'static str =
        "Birthday month should be a month name, e.g. Jan or January";

    pub fn new(value: &str) -> Result<Self, ConstraintViolation> {
        Self::parse(value).ok_or(ConstraintViolation::new(
            "birthday",
            Self::MESSAGE_CONSTRAINTS,
        ))
    }

    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    /// Parses a full or three-letter month name for birthday-month filters.
    pub fn parse_month(value: &str) -> Result<Month, ConstraintViolation> {
        value
            .trim()
            .parse::<Month>()
            .map_err(|_| {
                ConstraintViolation::new("birthday_month", Self::MESSAGE_MONTH_CONSTRAINTS)
            })
    }

    // chrono alone accepts one-digit days and long month names here.
    fn parse(value: &str) -> Option<Self> {
        let caps = BIRTHDAY_SHAPE_RE.captures(value)?;
        let month = caps["month"].parse::<Month>().ok()?;
        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()?;
        if date.year() < 1 {
            return None;
        }
        Some(Self { date, month })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn representation(&self) -> String {
        format!(
            "Birthday: {} {} {}",
            self.day(),
            self.month.name(),
            self.year()
        )
    }
}

impl TryFrom<String> for Birthday {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.as_str())
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format(BIRTHDAY_FORMAT))
    }
}
