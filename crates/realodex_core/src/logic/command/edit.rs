//! Replaces fields of a displayed person.
//!
//! # Invariants
//! - The edited person keeps its position in the book.
//! - The edited person must not collide with another person's name.
//! - A successful edit clears the active filter.

use crate::logic::command::{person_at, CommandOutcome, CommandResult};
use crate::logic::index::Index;
use crate::logic::messages::format_person;
use crate::model::constraint::ConstraintViolation;
use crate::model::contact::{Address, Email, Name, Phone};
use crate::model::household::{Family, HousingType, Income};
use crate::model::manager::ModelManager;
use crate::model::person::Person;
use crate::model::profile::{Birthday, Remark};
use crate::model::tag::Tag;
use std::collections::BTreeSet;

/// Field replacements for an edit. `None` keeps the current value.
///
/// `birthday: Some(None)` clears the birthday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub income: Option<Income>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub family: Option<Family>,
    pub tags: Option<BTreeSet<Tag>>,
    pub housing_type: Option<HousingType>,
    pub remark: Option<Remark>,
    pub birthday: Option<Option<Birthday>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.income.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.family.is_some()
            || self.tags.is_some()
            || self.housing_type.is_some()
            || self.remark.is_some()
            || self.birthday.is_some()
    }

    /// Builds the edited copy of `person`.
    ///
    /// # Errors
    /// - Fails when the replacement tag set is empty.
    pub fn apply(&self, person: &Person) -> Result<Person, ConstraintViolation> {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.income.unwrap_or(person.income()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| person.address().clone()),
            self.family.unwrap_or(person.family()),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
            self.housing_type.unwrap_or(person.housing_type()),
            self.remark
                .clone()
                .unwrap_or_else(|| person.remark().clone()),
            self.birthday.unwrap_or(person.birthday()),
        )
    }
}

/// Replaces fields of the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified by \
the index number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [i/INCOME] [e/EMAIL] [a/ADDRESS] \
[f/FAMILY] [h/HOUSING_TYPE] [t/TAG]... [r/REMARK] [b/BIRTHDAY]\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditPersonDescriptor {
        &self.descriptor
    }

    /// Shows the full list afterwards so the edited person stays visible.
    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let target = person_at(model, self.index)?;
        let edited = self.descriptor.apply(&target)?;
        model.set_person(&target, edited.clone())?;
        model.update_filter(None);
        Ok(CommandResult::new(format!(
            "Edited Person:\n{}",
            format_person(&edited)
        )))
    }
}
