//! Command-line prefixes.

use std::fmt::{Display, Formatter};

/// Marker that starts a named argument, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_INCOME: Prefix = Prefix::new("i/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_FAMILY: Prefix = Prefix::new("f/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_HOUSING_TYPE: Prefix = Prefix::new("h/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_BIRTHDAY: Prefix = Prefix::new("b/");

/// Every person-field prefix, in display order.
pub const PERSON_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_INCOME,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_FAMILY,
    PREFIX_TAG,
    PREFIX_HOUSING_TYPE,
    PREFIX_REMARK,
    PREFIX_BIRTHDAY,
];
