//! Allow-list pattern compiler.
//!
//! Turns wildcard patterns such as `@bot.*:example.com` into anchored,
//! immutable [`CompiledPattern`]s.
//!
//! The compiler is organized into two sub-modules:
//! - [`parser`] - Structural validation and localpart/domainpart splitting
//! - [`codegen`] - Escaping, wildcard substitution and anchoring
//!
//! # Examples
//!
//! ```rust
//! use mxid_allowlist::compile;
//!
//! let pattern = compile("@*:example.com")?;
//! assert_eq!(pattern.as_str(), r"^@([^:@]*):example\.com$");
//! assert!(pattern.is_match("@someone:example.com"));
//! # Ok::<(), mxid_allowlist::AllowlistError>(())
//! ```

pub mod codegen;
pub mod parser;

use crate::error::{AllowlistError, Result};
use crate::matcher::CompiledPattern;
use regex::Regex;
use tracing::{debug, warn};

/// Compile one pattern into an anchored matcher.
///
/// Fails with [`AllowlistError::InvalidPattern`] naming the broken rule when
/// the pattern is not shaped like `@localpart:domainpart`.
pub fn compile(pattern: &str) -> Result<CompiledPattern> {
    let parts = parser::parse_pattern(pattern).map_err(|err| {
        warn!(pattern, error = %err, "rejected allow-list pattern");
        err
    })?;

    let source = codegen::generate(&parts);
    let regex = Regex::new(&source).map_err(|err| {
        warn!(pattern, error = %err, "regex engine refused allow-list pattern");
        AllowlistError::InvalidRegex {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    })?;

    debug!(pattern, regex = %source, "compiled allow-list pattern");
    Ok(CompiledPattern::new(pattern, regex))
}

/// Compile every pattern in order, stopping at the first invalid one.
///
/// Partial results are discarded; later patterns are not validated once an
/// error is returned.
pub fn compile_all<I, S>(patterns: I) -> Result<Vec<CompiledPattern>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| compile(pattern.as_ref()))
        .collect()
}

/// Validate every pattern and return all failures.
///
/// Diagnostic companion to [`compile_all`] for reporting every bad entry of
/// a configuration at once. An empty result means `compile_all` succeeds.
pub fn validate_all<I, S>(patterns: I) -> Vec<AllowlistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .filter_map(|pattern| compile(pattern.as_ref()).err())
        .collect()
}
