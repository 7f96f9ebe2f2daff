//! `edit` argument parsing.
//!
//! # Invariants
//! - The preamble is a one-based index; a bad index is a format error.
//! - At least one field prefix is given.

use crate::logic::command::{EditCommand, EditPersonDescriptor};
use crate::logic::parser::error::{ParseError, ParseResult};
use crate::logic::parser::syntax::{
    Prefix, PERSON_PREFIXES, PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_FAMILY,
    PREFIX_HOUSING_TYPE, PREFIX_INCOME, PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK, PREFIX_TAG,
};
use crate::logic::parser::tokenizer::tokenize;
use crate::logic::parser::util::{
    parse_address, parse_birthday, parse_email, parse_family, parse_housing_type, parse_income,
    parse_index, parse_name, parse_phone, parse_remark, parse_tags,
};

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

/// Parses `edit INDEX [prefix/value]...`.
///
/// Given tags replace the whole tag set. An empty `b/` clears the birthday.
pub fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(args, PERSON_PREFIXES);
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidFormat(EditCommand::MESSAGE_USAGE))?;
    map.verify_no_duplicate_prefixes_for(SINGLE_VALUED_PREFIXES)?;

    let mut descriptor = EditPersonDescriptor::default();
    if let Some(raw) = map.value(PREFIX_NAME) {
        descriptor.name = Some(parse_name(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_PHONE) {
        descriptor.phone = Some(parse_phone(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_INCOME) {
        descriptor.income = Some(parse_income(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_EMAIL) {
        descriptor.email = Some(parse_email(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_ADDRESS) {
        descriptor.address = Some(parse_address(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_FAMILY) {
        descriptor.family = Some(parse_family(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_HOUSING_TYPE) {
        descriptor.housing_type = Some(parse_housing_type(raw)?);
    }
    if map.contains(PREFIX_TAG) {
        descriptor.tags = Some(parse_tags(map.all_values(PREFIX_TAG))?);
    }
    if let Some(raw) = map.value(PREFIX_REMARK) {
        descriptor.remark = Some(parse_remark(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_BIRTHDAY) {
        descriptor.birthday = Some(if raw.is_empty() {
            None
        } else {
            Some(parse_birthday(raw)?)
        });
    }

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldsEdited);
    }
    Ok(EditCommand::new(index, descriptor))
}
