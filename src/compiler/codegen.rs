//! Regex source generation for validated patterns.
//!
//! Every literal character is escaped; a `*` becomes a capturing class that
//! cannot cross the `@` sigil or the `:` delimiter. The result is anchored at
//! both ends so only full-string matches are accepted.

use super::parser::{PatternParts, DELIMITER, SIGIL, WILDCARD};

/// Capture group substituted for a wildcard token.
pub const WILDCARD_CLASS: &str = "([^:@]*)";

/// Build the regex fragment for a single localpart or domainpart.
pub fn part_fragment(part: &str) -> String {
    match part.split_once(WILDCARD) {
        Some((prefix, suffix)) => {
            let mut fragment = String::with_capacity(part.len() * 2 + WILDCARD_CLASS.len());
            fragment.push_str(&regex::escape(prefix));
            fragment.push_str(WILDCARD_CLASS);
            fragment.push_str(&regex::escape(suffix));
            fragment
        }
        None => regex::escape(part),
    }
}

/// Build the full anchored regex source for a validated pattern.
pub fn generate(parts: &PatternParts<'_>) -> String {
    // Neither the sigil nor the delimiter is a regex metacharacter.
    format!(
        "^{SIGIL}{}{DELIMITER}{}$",
        part_fragment(parts.localpart),
        part_fragment(parts.domainpart)
    )
}
