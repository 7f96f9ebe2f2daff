//! Person predicates used by the filter command.
//!
//! # Responsibility
//! - Provide one predicate type per filter category.
//! - Wrap them in `PersonFilter` so the model can hold any one of them.
//!
//! # Invariants
//! - Keyphrase predicates match case-insensitive substrings.
//! - `TagsMatch` requires every requested tag to be present.

use crate::model::household::HousingType;
use crate::model::person::Person;
use crate::model::profile::Month;
use crate::model::tag::{format_tags, Tag};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Boolean test over a person.
pub trait PersonPredicate {
    fn test(&self, person: &Person) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeyphrase {
    keyphrase: String,
}

impl NameContainsKeyphrase {
    pub fn new(keyphrase: impl Into<String>) -> Self {
        Self {
            keyphrase: keyphrase.into(),
        }
    }
}

impl PersonPredicate for NameContainsKeyphrase {
    fn test(&self, person: &Person) -> bool {
        contains_ignore_case(person.name().as_str(), &self.keyphrase)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkContainsKeyphrase {
    keyphrase: String,
}

impl RemarkContainsKeyphrase {
    pub fn new(keyphrase: impl Into<String>) -> Self {
        Self {
            keyphrase: keyphrase.into(),
        }
    }
}

impl PersonPredicate for RemarkContainsKeyphrase {
    fn test(&self, person: &Person) -> bool {
        contains_ignore_case(person.remark().as_str(), &self.keyphrase)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsMatch {
    tags: BTreeSet<Tag>,
}

impl TagsMatch {
    pub fn new(tags: BTreeSet<Tag>) -> Self {
        Self { tags }
    }
}

impl PersonPredicate for TagsMatch {
    fn test(&self, person: &Person) -> bool {
        self.tags.is_subset(person.tags())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HousingTypeMatch {
    housing_type: HousingType,
}

impl HousingTypeMatch {
    pub fn new(housing_type: HousingType) -> Self {
        Self { housing_type }
    }
}

impl PersonPredicate for HousingTypeMatch {
    fn test(&self, person: &Person) -> bool {
        person.housing_type() == self.housing_type
    }
}

/// Persons without a birthday never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayInMonth {
    month: Month,
}

impl BirthdayInMonth {
    pub fn new(month: Month) -> Self {
        Self { month }
    }
}

impl PersonPredicate for BirthdayInMonth {
    fn test(&self, person: &Person) -> bool {
        person
            .birthday()
            .is_some_and(|birthday| birthday.month() == self.month)
    }
}

/// The single active filter criterion of a filter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    Name(NameContainsKeyphrase),
    Remark(RemarkContainsKeyphrase),
    Tags(TagsMatch),
    HousingType(HousingTypeMatch),
    BirthdayMonth(BirthdayInMonth),
}

impl PersonPredicate for PersonFilter {
    fn test(&self, person: &Person) -> bool {
        match self {
            Self::Name(predicate) => predicate.test(person),
            Self::Remark(predicate) => predicate.test(person),
            Self::Tags(predicate) => predicate.test(person),
            Self::HousingType(predicate) => predicate.test(person),
            Self::BirthdayMonth(predicate) => predicate.test(person),
        }
    }
}

impl Display for PersonFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(p) => write!(f, "name contains `{}`", p.keyphrase),
            Self::Remark(p) => write!(f, "remark contains `{}`", p.keyphrase),
            Self::Tags(p) => write!(f, "tags include {}", format_tags(&p.tags)),
            Self::HousingType(p) => write!(f, "housing type is {}", p.housing_type),
            Self::BirthdayMonth(p) => write!(f, "birthday in {}", p.month.name()),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::{Address, Email, Name, Phone};
    use crate::model::household::{Family, Income};
    use crate::model::profile::{Birthday, Remark};

    fn person(name: &str, tags: &[&str], remark: &str, birthday: Option<&str>) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("98765432").unwrap(),
            Income::new("42000").unwrap(),
            Email::new("someone@example.com").unwrap(),
            Address::new("Jurong West Ave 6").unwrap(),
            Family::new("2").unwrap(),
            tags.iter().map(|raw| Tag::new(raw).unwrap()).collect(),
            HousingType::Condominium,
            Remark::new(remark).unwrap(),
            birthday.map(|raw| Birthday::new(raw).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn name_keyphrase_is_case_insensitive_substring() {
        let alice = person("Alice Pauline", &["buyer"], "", None);
        assert!(NameContainsKeyphrase::new("alice").test(&alice));
        assert!(NameContainsKeyphrase::new("CE PAU").test(&alice));
        assert!(!NameContainsKeyphrase::new("Bob").test(&alice));
    }

    #[test]
    fn remark_keyphrase_matches_inside_remark() {
        let alice = person("Alice", &["buyer"], "Loves cats and dogs", None);
        assert!(RemarkContainsKeyphrase::new("loves CATS").test(&alice));
        assert!(!RemarkContainsKeyphrase::new("hates").test(&alice));
    }

    #[test]
    fn tags_match_requires_all_tags() {
        let buyer = person("Alice", &["buyer"], "", None);
        let both = person("Bob", &["buyer", "seller"], "", None);
        let wanted: BTreeSet<Tag> = [Tag::new("buyer").unwrap(), Tag::new("seller").unwrap()]
            .into_iter()
            .collect();
        let predicate = TagsMatch::new(wanted);
        assert!(!predicate.test(&buyer));
        assert!(predicate.test(&both));
    }

    #[test]
    fn housing_type_match_is_exact() {
        let alice = person("Alice", &["buyer"], "", None);
        assert!(HousingTypeMatch::new(HousingType::Condominium).test(&alice));
        assert!(!HousingTypeMatch::new(HousingType::Hdb).test(&alice));
    }

    #[test]
    fn birthday_month_skips_persons_without_birthday() {
        let june = person("Alice", &["buyer"], "", Some("12Jun1990"));
        let none = person("Bob", &["buyer"], "", None);
        let predicate = PersonFilter::BirthdayMonth(BirthdayInMonth::new(Month::June));
        assert!(predicate.test(&june));
        assert!(!predicate.test(&none));
        assert_eq!(predicate.to_string(), "birthday in June");
    }
}
