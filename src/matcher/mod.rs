//! Identifier matching against compiled allow-lists.
//!
//! The matcher system separates compilation from evaluation:
//! - **Compilation Phase**: patterns are validated and turned into anchored regexes once
//! - **Evaluation Phase**: identifiers are checked against the immutable compiled set
//!
//! ## Core Components
//!
//! - [`CompiledPattern`] - One compiled pattern with full-string match semantics
//! - [`Allowlist`] - Ordered collection of compiled patterns
//! - [`is_allowed`] - First-match scan over a slice of compiled patterns

pub mod allowlist;
pub mod compiled;

pub use allowlist::{is_allowed, Allowlist};
pub use compiled::CompiledPattern;
