//! User-facing message templates shared across parsers and commands.

use crate::logic::parser::syntax::Prefix;
use crate::model::person::Person;
use crate::model::tag::format_tags;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";

pub fn persons_listed(count: usize) -> String {
    format!("{count} persons listed!")
}

/// Lists repeated prefixes in the order given, space separated.
pub fn duplicate_prefixes(prefixes: &[Prefix]) -> String {
    let joined = prefixes
        .iter()
        .map(|prefix| prefix.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{MESSAGE_DUPLICATE_FIELDS}{joined}")
}

/// Multi-line card used in command feedback.
pub fn format_person(person: &Person) -> String {
    let mut lines = vec![
        person.name().to_string(),
        format!("Phone: {}", person.phone()),
        person.income().representation(),
        format!("Email: {}", person.email()),
        format!("Address: {}", person.address()),
        person.family().representation(),
        format!("Tags: {}", format_tags(person.tags())),
        person.housing_type().representation(),
        person.remark().representation(),
    ];
    if let Some(birthday) = person.birthday() {
        lines.push(birthday.representation());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::duplicate_prefixes;
    use crate::logic::parser::syntax::{PREFIX_NAME, PREFIX_TAG};

    #[test]
    fn duplicate_prefix_message_lists_prefixes() {
        assert_eq!(
            duplicate_prefixes(&[PREFIX_NAME, PREFIX_TAG]),
            "Multiple values specified for the following single-valued field(s): n/ t/"
        );
    }
}
