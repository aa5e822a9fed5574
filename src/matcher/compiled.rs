//! Compiled allow-list pattern.

use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Compiled pattern for full-string identifier matching.
///
/// A `CompiledPattern` pairs the pattern an administrator wrote with the
/// anchored regex generated from it. It is immutable once built and cheap to
/// clone; both the source string and the regex program are shared.
///
/// # Regex Shape
///
/// Every compiled pattern has the form `^@<localpart>:<domainpart>$` where
/// literal text is escaped and each `*` becomes the capture group
/// `([^:@]*)`:
/// - `@someone:example.com` → `^@someone:example\.com$`
/// - `@bot.*:example.com` → `^@bot\.([^:@]*):example\.com$`
/// - `@*:*` → `^@([^:@]*):([^:@]*)$`
///
/// # Examples
///
/// ```rust
/// use mxid_allowlist::compile;
///
/// let pattern = compile("@bot.*:example.com")?;
/// assert!(pattern.is_match("@bot.alerts:example.com"));
/// assert!(!pattern.is_match("@human:example.com"));
/// assert_eq!(
///     pattern.wildcard_captures("@bot.alerts:example.com"),
///     Some(vec!["alerts"])
/// );
/// # Ok::<(), mxid_allowlist::AllowlistError>(())
/// ```
#[derive(Clone)]
pub struct CompiledPattern {
    /// Pattern as written in the allow-list
    pattern: Arc<str>,

    /// Anchored regex generated from the pattern
    regex: Regex,
}

impl CompiledPattern {
    pub(crate) fn new(pattern: &str, regex: Regex) -> Self {
        Self {
            pattern: pattern.into(),
            regex,
        }
    }

    /// The pattern this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The generated regex source, e.g. `^@([^:@]*):example\.com$`.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern contains a wildcard in either part.
    pub fn has_wildcard(&self) -> bool {
        self.regex.captures_len() > 1
    }

    /// Check whether `identifier` fully matches this pattern.
    ///
    /// No validation is performed on `identifier`; malformed input simply
    /// fails to match.
    pub fn is_match(&self, identifier: &str) -> bool {
        self.regex.is_match(identifier)
    }

    /// The text matched by each wildcard, localpart first.
    ///
    /// Returns `None` when `identifier` does not match. A literal pattern
    /// that matches yields an empty list.
    pub fn wildcard_captures<'h>(&self, identifier: &'h str) -> Option<Vec<&'h str>> {
        let captures = self.regex.captures(identifier)?;
        Some(
            captures
                .iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect(),
        )
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("pattern", &self.pattern)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
