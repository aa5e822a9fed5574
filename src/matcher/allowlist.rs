//! Allow-list evaluation.

use crate::compiler::compile_all;
use crate::error::Result;
use crate::matcher::compiled::CompiledPattern;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Check whether any pattern accepts `identifier`.
///
/// Patterns are tried in order and the scan stops at the first match. An
/// empty slice rejects everyone.
pub fn is_allowed(identifier: &str, patterns: &[CompiledPattern]) -> bool {
    first_match(identifier, patterns).is_some()
}

fn first_match<'a>(
    identifier: &str,
    patterns: &'a [CompiledPattern],
) -> Option<&'a CompiledPattern> {
    let matched = patterns.iter().find(|pattern| pattern.is_match(identifier));
    trace!(
        identifier,
        allowed = matched.is_some(),
        pattern = matched.map(CompiledPattern::pattern),
        "allow-list decision"
    );
    matched
}

/// An ordered, immutable set of compiled patterns.
///
/// Build it once when configuration is loaded and share it freely; it is
/// `Send + Sync` and cloning only bumps reference counts.
///
/// # Examples
///
/// ```rust
/// use mxid_allowlist::Allowlist;
///
/// let allowlist = Allowlist::new(["@admin:example.com", "@*:staff.example.com"])?;
/// assert!(allowlist.is_allowed("@alice:staff.example.com"));
/// assert!(!allowlist.is_allowed("@mallory:example.org"));
/// # Ok::<(), mxid_allowlist::AllowlistError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    patterns: Vec<CompiledPattern>,
}

impl Allowlist {
    /// Compile `patterns` into an allow-list, failing on the first invalid one.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = compile_all(patterns)?;
        debug!(count = patterns.len(), "built allow-list");
        Ok(Self { patterns })
    }

    /// Wrap already compiled patterns.
    pub fn from_compiled(patterns: Vec<CompiledPattern>) -> Self {
        Self { patterns }
    }

    pub fn is_allowed(&self, identifier: &str) -> bool {
        is_allowed(identifier, &self.patterns)
    }

    /// The first pattern, in allow-list order, that accepts `identifier`.
    pub fn matching_pattern(&self, identifier: &str) -> Option<&CompiledPattern> {
        first_match(identifier, &self.patterns)
    }

    /// Evaluate many identifiers in parallel.
    ///
    /// Results are returned in the same order as `identifiers`.
    pub fn check_many<S>(&self, identifiers: &[S]) -> Vec<bool>
    where
        S: AsRef<str> + Sync,
    {
        identifiers
            .par_iter()
            .map(|identifier| self.is_allowed(identifier.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledPattern> {
        self.patterns.iter()
    }

    pub fn as_slice(&self) -> &[CompiledPattern] {
        &self.patterns
    }
}

impl<'a> IntoIterator for &'a Allowlist {
    type Item = &'a CompiledPattern;
    type IntoIter = std::slice::Iter<'a, CompiledPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
