//! Person aggregate.
//!
//! # Responsibility
//! - Compose validated field values into one immutable client record.
//! - Define the weak ("same person") and strong (`==`) equality notions.
//!
//! # Invariants
//! - Every field satisfies its value-object constraint; there is no setter.
//! - Edits build a new `Person` that replaces the old one in the model.
//! - `is_same_person` compares names only.

use crate::model::constraint::ConstraintViolation;
use crate::model::contact::{Address, Email, Name, Phone};
use crate::model::household::{Family, HousingType, Income};
use crate::model::profile::{Birthday, Remark};
use crate::model::tag::{format_tags, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// One client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    name: Name,
    phone: Phone,
    income: Income,
    email: Email,
    address: Address,
    family: Family,
    tags: BTreeSet<Tag>,
    housing_type: HousingType,
    remark: Remark,
    birthday: Option<Birthday>,
}

/// Stored shape of a person before record-level checks.
#[derive(Debug, Deserialize)]
struct PersonRecord {
    name: Name,
    phone: Phone,
    income: Income,
    email: Email,
    address: Address,
    family: Family,
    tags: BTreeSet<Tag>,
    housing_type: HousingType,
    #[serde(default)]
    remark: Remark,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = ConstraintViolation;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.name,
            record.phone,
            record.income,
            record.email,
            record.address,
            record.family,
            record.tags,
            record.housing_type,
            record.remark,
            record.birthday,
        )
    }
}

impl Person {
    pub const MESSAGE_TAGS_REQUIRED: &'static str =
        "A person should have at least one tag (buyer or seller)";

    /// Builds a person from validated fields.
    ///
    /// # Errors
    /// - Fails when `tags` is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        income: Income,
        email: Email,
        address: Address,
        family: Family,
        tags: BTreeSet<Tag>,
        housing_type: HousingType,
        remark: Remark,
        birthday: Option<Birthday>,
    ) -> Result<Self, ConstraintViolation> {
        if tags.is_empty() {
            return Err(ConstraintViolation::new("tags", Self::MESSAGE_TAGS_REQUIRED));
        }
        Ok(Self {
            name,
            phone,
            income,
            email,
            address,
            family,
            tags,
            housing_type,
            remark,
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn income(&self) -> Income {
        self.income
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn housing_type(&self) -> HousingType {
        self.housing_type
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Weak identity: two records describe the same client iff names match.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// Renders this person as `add` command arguments.
    ///
    /// Feeding the result back through the add parser yields an equal person
    /// as long as no address or remark contains a whitespace-led prefix such
    /// as ` n/`. Such text cannot be entered through commands; it can only
    /// come from an edited data file.
    pub fn command_args(&self) -> String {
        let mut args = format!(
            "n/{} p/{} i/{} e/{} a/{} f/{} h/{}",
            self.name,
            self.phone,
            self.income,
            self.email,
            self.address,
            self.family,
            self.housing_type
        );
        for tag in &self.tags {
            args.push_str(&format!(" t/{tag}"));
        }
        if !self.remark.is_empty() {
            args.push_str(&format!(" r/{}", self.remark));
        }
        if let Some(birthday) = self.birthday {
            args.push_str(&format!(" b/{birthday}"));
        }
        args
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Income: {}; Email: {}; Address: {}; Family: {}; Tags: {}; Housing Type: {}; Remark: {}",
            self.name,
            self.phone,
            self.income,
            self.email,
            self.address,
            self.family,
            format_tags(&self.tags),
            self.housing_type,
            self.remark
        )?;
        if let Some(birthday) = self.birthday {
            write!(f, "; Birthday: {birthday}")?;
        }
        Ok(())
    }
}
