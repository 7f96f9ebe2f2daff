use realodex_core::logic::parser::filter::parse_filter;
use realodex_core::logic::parser::syntax::{PREFIX_NAME, PREFIX_TAG};
use realodex_core::{
    Birthday, BirthdayInMonth, FilterCommand, HousingType, HousingTypeMatch, Month,
    NameContainsKeyphrase, Name, ParseError, PersonFilter, RemarkContainsKeyphrase, Tag,
    TagsMatch,
};
use std::collections::BTreeSet;

fn usage_error() -> ParseError {
    ParseError::InvalidFormat(FilterCommand::MESSAGE_USAGE)
}

fn assert_failure_message(input: &str, expected: &str) {
    let err = parse_filter(input).unwrap_err();
    assert_eq!(err.to_string(), expected, "input `{input}`");
}

#[test]
fn blank_input_is_usage_error() {
    assert_eq!(parse_filter("     ").unwrap_err(), usage_error());
}

#[test]
fn name_prefix_builds_name_filter() {
    let command = parse_filter(" n/Alice").unwrap();
    assert_eq!(
        command,
        FilterCommand::new(PersonFilter::Name(NameContainsKeyphrase::new("Alice")))
    );
}

#[test]
fn invalid_or_empty_name_reports_name_constraint() {
    assert_failure_message(" n/#$@%^", Name::MESSAGE_CONSTRAINTS);
    assert_failure_message(" n/", Name::MESSAGE_CONSTRAINTS);
}

#[test]
fn remark_prefix_builds_remark_filter() {
    let command = parse_filter(" r/Loves cats").unwrap();
    assert_eq!(
        command,
        FilterCommand::new(PersonFilter::Remark(RemarkContainsKeyphrase::new(
            "Loves cats"
        )))
    );
}

#[test]
fn empty_remark_is_rejected() {
    assert_eq!(parse_filter(" r/").unwrap_err(), ParseError::EmptyRemarkFilter);
    assert_failure_message(" r/", FilterCommand::MESSAGE_FILTER_EMPTY_REMARK);
}

#[test]
fn tag_prefixes_build_normalized_tag_filter() {
    let single = parse_filter(" t/buyer").unwrap();
    assert_eq!(
        single,
        FilterCommand::new(PersonFilter::Tags(TagsMatch::new(BTreeSet::from([
            Tag::new("buyer").unwrap()
        ]))))
    );

    let both = parse_filter(" t/Buyer t/SELLER").unwrap();
    assert_eq!(
        both,
        FilterCommand::new(PersonFilter::Tags(TagsMatch::new(BTreeSet::from([
            Tag::new("buyer").unwrap(),
            Tag::new("seller").unwrap(),
        ]))))
    );
}

#[test]
fn invalid_tag_reports_tag_constraint() {
    assert_failure_message(" t/customer", Tag::MESSAGE_CONSTRAINTS);
    assert_failure_message(" t/Buyer t/customer", Tag::MESSAGE_CONSTRAINTS);
    assert_failure_message(" t/", Tag::MESSAGE_CONSTRAINTS);
    assert!(Tag::new(" t/Buyer$").is_err());
}

#[test]
fn repeated_tag_is_duplicate_prefix() {
    assert_eq!(
        parse_filter(" t/Buyer t/Seller t/Buyer").unwrap_err(),
        ParseError::DuplicatePrefixes(vec![PREFIX_TAG])
    );
    assert_failure_message(
        " t/buyer t/BUYER",
        "Multiple values specified for the following single-valued field(s): t/",
    );
}

#[test]
fn birthday_prefix_builds_month_filter() {
    let command = parse_filter(" b/June").unwrap();
    assert_eq!(
        command,
        FilterCommand::new(PersonFilter::BirthdayMonth(BirthdayInMonth::new(
            Month::June
        )))
    );
    assert_failure_message(" b/#$@%^", Birthday::MESSAGE_MONTH_CONSTRAINTS);
    assert_failure_message(" b/", Birthday::MESSAGE_MONTH_CONSTRAINTS);
    assert_ne!(
        Birthday::MESSAGE_MONTH_CONSTRAINTS,
        Birthday::MESSAGE_CONSTRAINTS
    );
}

#[test]
fn housing_prefix_builds_housing_filter() {
    let command = parse_filter(" h/hdb").unwrap();
    assert_eq!(
        command,
        FilterCommand::new(PersonFilter::HousingType(HousingTypeMatch::new(
            HousingType::Hdb
        )))
    );
    assert_failure_message(" h/hdbb", HousingType::MESSAGE_CONSTRAINTS);
    assert_failure_message(" h/", HousingType::MESSAGE_CONSTRAINTS);
}

#[test]
fn free_text_and_unknown_prefixes_are_usage_errors() {
    assert_eq!(parse_filter(" invalidArg").unwrap_err(), usage_error());
    assert_eq!(parse_filter(" p/999").unwrap_err(), usage_error());
    assert_eq!(parse_filter(" yapyap n/Alice").unwrap_err(), usage_error());
}

#[test]
fn mixing_categories_is_a_conflict() {
    for input in [" n/Alice r/Loves cats", " n/Alice r/", " n/ r/Loves cats", " h/hdb t/buyer"] {
        assert_eq!(
            parse_filter(input).unwrap_err(),
            ParseError::FilterConflict,
            "input `{input}`"
        );
    }
    let message = parse_filter(" n/Alice r/Loves cats").unwrap_err().to_string();
    assert!(message.starts_with("Invalid command format!"));
    assert!(message.ends_with(FilterCommand::MESSAGE_FILTER_CONFLICT));
}

#[test]
fn repeated_name_is_duplicate_prefix() {
    assert_eq!(
        parse_filter(" n/Alice n/Bob").unwrap_err(),
        ParseError::DuplicatePrefixes(vec![PREFIX_NAME])
    );
}
