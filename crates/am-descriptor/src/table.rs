//! One-pass flag index.
//!
//! [`FlagTable::from_tokens`] walks the token stream once, parses each flag
//! name into a [`FlagKey`], and records its value and token position.  Lookups
//! are then O(1).  A repeated key keeps every occurrence, and positions let
//! callers pick the one inside the state or transition being decoded.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as IndexMap;
use std::ops::Range;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as IndexMap;

use tracing::debug;

use crate::lexer::flag_pairs;
use crate::{DescriptorError, DescriptorResult, FlagKey};

// ── Flag ──────────────────────────────────────────────────────────────────────

/// One decoded `--flag value` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Flag<'a> {
    pub key:      FlagKey<'a>,
    /// The flag token as written, e.g. `--rwm0_1`.
    pub text:     &'a str,
    pub value:    Option<&'a str>,
    /// Index of the flag token in the stream the table was built from.
    pub position: usize,
}

impl<'a> Flag<'a> {
    pub fn value(&self) -> DescriptorResult<&'a str> {
        self.value
            .ok_or_else(|| DescriptorError::MissingValue(self.text.to_owned()))
    }

    /// Parse the value as a non-negative integer.  Integral reals such as
    /// `3.0` are accepted.
    pub fn parse_u32(&self) -> DescriptorResult<u32> {
        let value = self.value()?;
        if let Ok(n) = value.parse::<u32>() {
            return Ok(n);
        }
        match value.parse::<f64>() {
            Ok(x) if x.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&x) => Ok(x as u32),
            _ => Err(self.invalid(value)),
        }
    }

    /// Parse the value as a real number.
    pub fn parse_f64(&self) -> DescriptorResult<f64> {
        let value = self.value()?;
        value.parse::<f64>().map_err(|_| self.invalid(value))
    }

    fn invalid(&self, value: &str) -> DescriptorError {
        DescriptorError::InvalidValue {
            flag:  self.text.to_owned(),
            value: value.to_owned(),
        }
    }
}

// ── FlagTable ─────────────────────────────────────────────────────────────────

/// All recognised flags of a token stream, indexed by key.
///
/// Every occurrence of a key is kept in stream order.  [`get`](Self::get)
/// returns the first, matching a front-to-back search of the whole stream;
/// [`get_within`](Self::get_within) returns the first inside a token span,
/// matching a search of that slice only.
#[derive(Debug, Default)]
pub struct FlagTable<'a> {
    flags:       Vec<Flag<'a>>,
    index:       IndexMap<FlagKey<'a>, Vec<usize>>,
    token_count: usize,
}

impl<'a> FlagTable<'a> {
    /// Index every recognised flag in `tokens`.  Flags outside the grammar
    /// are skipped.
    pub fn from_tokens(tokens: &[&'a str]) -> FlagTable<'a> {
        let mut table = FlagTable {
            flags:       Vec::with_capacity(tokens.len() / 2),
            index:       IndexMap::default(),
            token_count: tokens.len(),
        };

        for (position, text, value) in flag_pairs(tokens) {
            let Some(key) = FlagKey::parse(text) else {
                debug!(flag = text, position, "skipping unrecognised flag");
                continue;
            };
            let slot = table.flags.len();
            table.flags.push(Flag { key, text, value, position });
            table.index.entry(key).or_default().push(slot);
        }
        table
    }

    pub fn get(&self, key: &FlagKey<'a>) -> Option<&Flag<'a>> {
        self.occurrences(key).next()
    }

    /// The first occurrence of `key` whose token position lies in `span`.
    pub fn get_within(&self, key: &FlagKey<'a>, span: &Range<usize>) -> Option<&Flag<'a>> {
        self.occurrences(key).find(|flag| span.contains(&flag.position))
    }

    /// Every occurrence of `key`, in stream order.
    pub fn occurrences(&self, key: &FlagKey<'a>) -> impl Iterator<Item = &Flag<'a>> + '_ {
        self.index
            .get(key)
            .into_iter()
            .flatten()
            .map(|&slot| &self.flags[slot])
    }

    /// Like [`get`](Self::get), but a missing flag is an error.
    pub fn require(&self, key: &FlagKey<'a>) -> DescriptorResult<&Flag<'a>> {
        self.get(key)
            .ok_or_else(|| DescriptorError::MissingFlag(key.to_string()))
    }

    /// Token position of `key`, if present.
    pub fn position(&self, key: &FlagKey<'a>) -> Option<usize> {
        self.get(key).map(|flag| flag.position)
    }

    /// Every recognised flag in stream order.
    pub fn flags(&self) -> &[Flag<'a>] {
        &self.flags
    }

    /// Length of the token stream the table was built from.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
