//! Filter command parser.
//!
//! # Invariants
//! - Exactly one filter category per command; a second category is a
//!   conflict even when one of the values is empty.
//! - Conflict is checked before any value validation.

use crate::logic::command::FilterCommand;
use crate::logic::parser::error::{ParseError, ParseResult};
use crate::logic::parser::syntax::{
    Prefix, PREFIX_BIRTHDAY, PREFIX_HOUSING_TYPE, PREFIX_NAME, PREFIX_REMARK, PREFIX_TAG,
};
use crate::logic::parser::tokenizer::{tokenize, ArgumentMultimap};
use crate::logic::parser::util::{parse_housing_type, parse_month, parse_name, parse_tags};
use crate::model::predicate::{
    BirthdayInMonth, HousingTypeMatch, NameContainsKeyphrase, PersonFilter,
    RemarkContainsKeyphrase, TagsMatch,
};

const FILTER_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_REMARK,
    PREFIX_TAG,
    PREFIX_HOUSING_TYPE,
    PREFIX_BIRTHDAY,
];

pub fn parse_filter(args: &str) -> ParseResult<FilterCommand> {
    let map = tokenize(args, FILTER_PREFIXES);
    let present = map.present_prefixes();
    let category = match present.as_slice() {
        [] => return Err(ParseError::InvalidFormat(FilterCommand::MESSAGE_USAGE)),
        _ if !map.preamble().is_empty() => {
            return Err(ParseError::InvalidFormat(FilterCommand::MESSAGE_USAGE))
        }
        [single] => *single,
        _ => return Err(ParseError::FilterConflict),
    };

    let filter = match category {
        PREFIX_TAG => parse_tag_filter(&map)?,
        PREFIX_NAME => {
            let name = parse_name(single_value(&map, PREFIX_NAME)?)?;
            PersonFilter::Name(NameContainsKeyphrase::new(name.as_str()))
        }
        PREFIX_REMARK => {
            let keyphrase = single_value(&map, PREFIX_REMARK)?;
            if keyphrase.is_empty() {
                return Err(ParseError::EmptyRemarkFilter);
            }
            PersonFilter::Remark(RemarkContainsKeyphrase::new(keyphrase))
        }
        PREFIX_HOUSING_TYPE => {
            let housing_type = parse_housing_type(single_value(&map, PREFIX_HOUSING_TYPE)?)?;
            PersonFilter::HousingType(HousingTypeMatch::new(housing_type))
        }
        PREFIX_BIRTHDAY => {
            let month = parse_month(single_value(&map, PREFIX_BIRTHDAY)?)?;
            PersonFilter::BirthdayMonth(BirthdayInMonth::new(month))
        }
        _ => return Err(ParseError::InvalidFormat(FilterCommand::MESSAGE_USAGE)),
    };
    Ok(FilterCommand::new(filter))
}

fn single_value(map: &ArgumentMultimap, prefix: Prefix) -> ParseResult<&str> {
    map.verify_no_duplicate_prefixes_for(&[prefix])?;
    Ok(map.value(prefix).unwrap_or_default())
}

/// Tags may repeat as `t/`, but the same tag twice (after case
/// normalization) counts as a duplicate prefix.
fn parse_tag_filter(map: &ArgumentMultimap) -> ParseResult<PersonFilter> {
    let raw = map.all_values(PREFIX_TAG);
    let tags = parse_tags(raw)?;
    if tags.len() != raw.len() {
        return Err(ParseError::DuplicatePrefixes(vec![PREFIX_TAG]));
    }
    Ok(PersonFilter::Tags(TagsMatch::new(tags)))
}
