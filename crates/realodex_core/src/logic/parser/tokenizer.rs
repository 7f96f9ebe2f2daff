//! Splits argument text into a preamble and prefixed values.
//!
//! # Invariants
//! - A prefix is recognized only at the start of input or after whitespace,
//!   so `abc/n/x` never splits.
//! - Every occurrence is kept in input order; values and preamble are trimmed.
//! - Unrecognized prefixes stay part of the surrounding text.

use crate::logic::parser::error::{ParseError, ParseResult};
use crate::logic::parser::syntax::Prefix;
use std::collections::BTreeMap;

/// Prefix → values mapping produced by [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: BTreeMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Prefixes that appeared at least once, in prefix order.
    pub fn present_prefixes(&self) -> Vec<Prefix> {
        self.values.keys().copied().collect()
    }

    /// Fails when any of `prefixes` occurs more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenizes `args` against the recognized `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            prefix_positions(args, *prefix)
                .into_iter()
                .map(move |position| (position, *prefix))
        })
        .collect();
    positions.sort_by_key(|(position, _)| *position);

    let preamble_end = positions
        .first()
        .map_or(args.len(), |(position, _)| *position);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: BTreeMap::new(),
    };

    for (idx, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(idx + 1)
            .map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn prefix_positions(args: &str, prefix: Prefix) -> Vec<usize> {
    args.match_indices(prefix.as_str())
        .map(|(position, _)| position)
        .filter(|position| {
            args[..*position]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace)
        })
        .collect()
}
