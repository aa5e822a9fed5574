//! Structural validation of allow-list patterns.
//!
//! A pattern has the same shape as an MXID: exactly one leading `@`, exactly
//! one `:` delimiter, and non-empty localpart and domainpart. Each part may
//! additionally hold at most one `*` wildcard.

use crate::error::{AllowlistError, Part, PatternViolation, Result};

pub const SIGIL: char = '@';
pub const DELIMITER: char = ':';
pub const WILDCARD: char = '*';

/// A validated pattern split at the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternParts<'a> {
    pub localpart: &'a str,
    pub domainpart: &'a str,
}

impl<'a> PatternParts<'a> {
    pub fn part(&self, part: Part) -> &'a str {
        match part {
            Part::Localpart => self.localpart,
            Part::Domainpart => self.domainpart,
        }
    }
}

/// Validate `pattern` and split it into its two parts.
///
/// Rules are checked in a fixed order so a pattern breaking several of them
/// always reports the same violation.
pub fn parse_pattern(pattern: &str) -> Result<PatternParts<'_>> {
    let violation = |v| AllowlistError::invalid(pattern, v);

    let rest = pattern
        .strip_prefix(SIGIL)
        .ok_or_else(|| violation(PatternViolation::MissingAt))?;

    if rest.contains(SIGIL) {
        return Err(violation(PatternViolation::MultipleAt));
    }

    let (localpart, domainpart) = rest
        .split_once(DELIMITER)
        .ok_or_else(|| violation(PatternViolation::MissingDelimiter))?;

    if domainpart.contains(DELIMITER) {
        return Err(violation(PatternViolation::MultipleDelimiters));
    }
    if localpart.is_empty() {
        return Err(violation(PatternViolation::EmptyLocalpart));
    }
    if domainpart.is_empty() {
        return Err(violation(PatternViolation::EmptyDomainpart));
    }

    let parts = PatternParts {
        localpart,
        domainpart,
    };

    for part in [Part::Localpart, Part::Domainpart] {
        if parts.part(part).matches(WILDCARD).count() > 1 {
            return Err(violation(PatternViolation::MultipleWildcards { part }));
        }
    }

    Ok(parts)
}
