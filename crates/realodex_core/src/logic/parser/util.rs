//! Field parsers shared by command parsers.
//!
//! All parsers trim their input before validation.

use crate::logic::index::Index;
use crate::logic::parser::error::{ParseError, ParseResult};
use crate::model::contact::{Address, Email, Name, Phone};
use crate::model::household::{Family, HousingType, Income};
use crate::model::profile::{Birthday, Month, Remark};
use crate::model::tag::Tag;
use std::collections::BTreeSet;

/// Parses a one-based, non-zero unsigned index.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(raw: &str) -> ParseResult<Name> {
    Ok(Name::new(raw.trim())?)
}

pub fn parse_phone(raw: &str) -> ParseResult<Phone> {
    Ok(Phone::new(raw.trim())?)
}

pub fn parse_income(raw: &str) -> ParseResult<Income> {
    Ok(Income::new(raw.trim())?)
}

pub fn parse_email(raw: &str) -> ParseResult<Email> {
    Ok(Email::new(raw.trim())?)
}

pub fn parse_address(raw: &str) -> ParseResult<Address> {
    Ok(Address::new(raw.trim())?)
}

pub fn parse_family(raw: &str) -> ParseResult<Family> {
    Ok(Family::new(raw.trim())?)
}

pub fn parse_housing_type(raw: &str) -> ParseResult<HousingType> {
    Ok(HousingType::new(raw.trim())?)
}

pub fn parse_remark(raw: &str) -> ParseResult<Remark> {
    Ok(Remark::new(raw)?)
}

pub fn parse_birthday(raw: &str) -> ParseResult<Birthday> {
    Ok(Birthday::new(raw.trim())?)
}

pub fn parse_month(raw: &str) -> ParseResult<Month> {
    Ok(Birthday::parse_month(raw)?)
}

pub fn parse_tag(raw: &str) -> ParseResult<Tag> {
    Ok(Tag::new(raw.trim())?)
}

/// Parses every tag value; the set collapses case-insensitive repeats.
pub fn parse_tags(raw: &[String]) -> ParseResult<BTreeSet<Tag>> {
    raw.iter().map(|value| parse_tag(value)).collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_index, parse_name, parse_tags};
    use crate::logic::parser::error::ParseError;
    use crate::model::contact::Name;

    #[test]
    fn parse_index_accepts_padded_positive_numbers() {
        assert_eq!(parse_index("  1 ").unwrap().zero_based(), 0);
        assert_eq!(parse_index("42").unwrap().one_based(), 42);
    }

    #[test]
    fn parse_index_rejects_zero_signs_and_text() {
        for raw in ["0", "-1", "+1", "a", "", "1 2", "99999999999999999999999"] {
            assert_eq!(parse_index(raw).unwrap_err(), ParseError::InvalidIndex);
        }
    }

    #[test]
    fn parse_name_trims_before_validation() {
        assert_eq!(parse_name("  Alice ").unwrap(), Name::new("Alice").unwrap());
        let err = parse_name("   ").unwrap_err();
        assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn parse_tags_collapses_case_repeats() {
        let raw = vec!["Buyer".to_string(), "buyer".to_string()];
        assert_eq!(parse_tags(&raw).unwrap().len(), 1);
    }
}
