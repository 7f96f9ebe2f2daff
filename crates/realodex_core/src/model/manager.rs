//! In-memory person book with a filtered view.
//!
//! # Responsibility
//! - Own the ordered person list and the active filter.
//! - Enforce uniqueness by the "same person" notion.
//!
//! # Invariants
//! - No two stored persons are the same person.
//! - Insertion order is preserved; replacement keeps the original slot.
//! - `filtered_persons` reflects the active filter at call time.

use crate::model::contact::Name;
use crate::model::person::Person;
use crate::model::predicate::{PersonFilter, PersonPredicate};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A person with the same name already exists.
    DuplicatePerson(Name),
    /// The target person is not stored.
    PersonNotFound(Name),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(name) => {
                write!(f, "This person already exists in Realodex: {name}")
            }
            Self::PersonNotFound(name) => write!(f, "Person not found in Realodex: {name}"),
        }
    }
}

impl Error for ModelError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelManager {
    persons: Vec<Person>,
    filter: Option<PersonFilter>,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from stored persons, rejecting duplicates.
    pub fn with_persons(persons: Vec<Person>) -> ModelResult<Self> {
        let mut model = Self::new();
        for person in persons {
            model.add_person(person)?;
        }
        Ok(model)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|existing| existing.is_same_person(person))
    }

    pub fn find_by_name(&self, name: &Name) -> Option<&Person> {
        self.persons.iter().find(|person| person.name() == name)
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson(person.name().clone()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Removes the stored person equal to `target`.
    pub fn delete_person(&mut self, target: &Person) -> ModelResult<Person> {
        let position = self
            .persons
            .iter()
            .position(|person| person == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name().clone()))?;
        Ok(self.persons.remove(position))
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may keep `target`'s name but must not collide with any other
    /// stored person.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        let position = self
            .persons
            .iter()
            .position(|person| person == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name().clone()))?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(idx, person)| idx != position && person.is_same_person(&edited));
        if collides {
            return Err(ModelError::DuplicatePerson(edited.name().clone()));
        }
        self.persons[position] = edited;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    pub fn filter(&self) -> Option<&PersonFilter> {
        self.filter.as_ref()
    }

    /// Replaces the active filter. `None` shows every person.
    pub fn update_filter(&mut self, filter: Option<PersonFilter>) {
        self.filter = filter;
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| self.filter.as_ref().map_or(true, |f| f.test(person)))
            .collect()
    }
}
