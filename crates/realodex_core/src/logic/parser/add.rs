//! `add` argument parsing.
//!
//! # Invariants
//! - Every required prefix is present and the preamble is empty.
//! - Single-valued prefixes appear at most once; `t/` may repeat.

use crate::logic::command::AddCommand;
use crate::logic::parser::error::{ParseError, ParseResult};
use crate::logic::parser::syntax::{
    Prefix, PERSON_PREFIXES, PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_FAMILY,
    PREFIX_HOUSING_TYPE, PREFIX_INCOME, PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK, PREFIX_TAG,
};
use crate::logic::parser::tokenizer::tokenize;
use crate::logic::parser::util::{
    parse_address, parse_birthday, parse_email, parse_family, parse_housing_type, parse_income,
    parse_name, parse_phone, parse_remark, parse_tags,
};
use crate::model::person::Person;

const REQUIRED_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_INCOME,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_FAMILY,
    PREFIX_HOUSING_TYPE,
    PREFIX_TAG,
];

const SINGLE_VALUED_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_INCOME,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_FAMILY,
    PREFIX_HOUSING_TYPE,
    PREFIX_REMARK,
    PREFIX_BIRTHDAY,
];

/// Parses `add` arguments.
///
/// Missing required prefixes or a non-empty preamble are format errors;
/// field values are then validated in prefix order.
pub fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let map = tokenize(args, PERSON_PREFIXES);
    let has_required = REQUIRED_PREFIXES.iter().all(|prefix| map.contains(*prefix));
    if !has_required || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(AddCommand::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(SINGLE_VALUED_PREFIXES)?;

    let value = |prefix: Prefix| map.value(prefix).unwrap_or_default();
    let person = Person::new(
        parse_name(value(PREFIX_NAME))?,
        parse_phone(value(PREFIX_PHONE))?,
        parse_income(value(PREFIX_INCOME))?,
        parse_email(value(PREFIX_EMAIL))?,
        parse_address(value(PREFIX_ADDRESS))?,
        parse_family(value(PREFIX_FAMILY))?,
        parse_tags(map.all_values(PREFIX_TAG))?,
        parse_housing_type(value(PREFIX_HOUSING_TYPE))?,
        parse_remark(value(PREFIX_REMARK))?,
        map.value(PREFIX_BIRTHDAY)
            .map(parse_birthday)
            .transpose()?,
    )?;
    Ok(AddCommand::new(person))
}

#[cfg(test)]
mod tests {
    use super::parse_add;
    use crate::logic::command::AddCommand;
    use crate::logic::parser::error::ParseError;
    use crate::logic::parser::syntax::{PREFIX_NAME, PREFIX_PHONE};
    use crate::model::household::{Family, HousingType};
    use crate::model::tag::Tag;

    const FULL: &str = " n/Amy Bee p/11111111 i/5000 e/amy@example.com a/Block 312, Amy Street 1 \
f/2 h/condo t/buyer t/Seller r/Wants sea view b/03Mar1985";

    #[test]
    fn parses_all_fields() {
        let command = parse_add(FULL).unwrap();
        let person = command.person();
        assert_eq!(person.name().as_str(), "Amy Bee");
        assert_eq!(person.family().size(), 2);
        assert_eq!(person.housing_type(), HousingType::Condominium);
        assert_eq!(person.tags().len(), 2);
        assert!(person.tags().contains(&Tag::new("seller").unwrap()));
        assert_eq!(person.remark().as_str(), "Wants sea view");
        assert_eq!(person.birthday().unwrap().to_string(), "03Mar1985");
    }

    #[test]
    fn optional_fields_can_be_omitted() {
        let command = parse_add(
            " n/Amy p/111 i/0 e/amy@example.com a/Street 1 f/1 h/hdb t/buyer",
        )
        .unwrap();
        assert!(command.person().remark().is_empty());
        assert!(command.person().birthday().is_none());
    }

    #[test]
    fn missing_required_prefix_is_format_error() {
        let err = parse_add(" n/Amy p/111 i/0 e/amy@example.com a/Street 1 f/1 h/hdb").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat(AddCommand::MESSAGE_USAGE));
    }

    #[test]
    fn preamble_is_format_error() {
        let err = parse_add(&format!(" some preamble{FULL}")).unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat(AddCommand::MESSAGE_USAGE));
    }

    #[test]
    fn repeated_single_valued_prefixes_are_reported() {
        let err = parse_add(&format!("{FULL} n/Bob p/222")).unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE])
        );
    }

    #[test]
    fn invalid_family_reports_constraint() {
        let err = parse_add(&FULL.replace("f/2", "f/0")).unwrap_err();
        assert_eq!(err.to_string(), Family::MESSAGE_CONSTRAINTS);
    }
}
