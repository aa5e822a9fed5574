//! # mxid-allowlist
//!
//! Wildcard allow-lists for fully-qualified [Matrix user identifiers](https://spec.matrix.org/latest/appendices/#user-identifiers)
//! (`@localpart:domainpart`), for deciding who may use a bridge, bot or other service.
//!
//! Patterns look like MXIDs where each part may hold one `*`, standing for any
//! run of characters other than `@` and `:`:
//!
//! | Pattern | Accepts |
//! |---------|---------|
//! | `@someone:example.com` | exactly that user |
//! | `@*:example.com` | every user on `example.com` |
//! | `@bot.*:example.com` | every `bot.` user on `example.com` |
//! | `@someone:*.organization.com` | `someone` on any subdomain of `organization.com` |
//!
//! ## Quick Start
//!
//! ```rust
//! use mxid_allowlist::{compile_all, is_allowed};
//!
//! let patterns = compile_all(["@*:example.com", "@admin:example.org"])?;
//!
//! assert!(is_allowed("@someone:example.com", &patterns));
//! assert!(!is_allowed("@someone:example.org", &patterns));
//! # Ok::<(), mxid_allowlist::AllowlistError>(())
//! ```
//!
//! ### Owning Collection
//!
//! ```rust
//! use mxid_allowlist::Allowlist;
//!
//! // Compile once at configuration load, then share across request handlers.
//! let allowlist = Allowlist::new(["@bot.*:example.com"])?;
//!
//! assert!(allowlist.is_allowed("@bot.alerts:example.com"));
//! assert_eq!(
//!     allowlist.check_many(&["@bot.a:example.com", "@human:example.com"]),
//!     vec![true, false]
//! );
//! # Ok::<(), mxid_allowlist::AllowlistError>(())
//! ```
//!
//! ### Invalid Patterns
//!
//! ```rust
//! use mxid_allowlist::{compile, PatternViolation};
//!
//! let err = compile("@someone").unwrap_err();
//! assert_eq!(err.violation(), Some(PatternViolation::MissingDelimiter));
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod matcher;

// Compiler
pub use compiler::{compile, compile_all, validate_all};

// Configuration
pub use config::AllowlistConfig;

// Core types and errors
pub use error::{AllowlistError, Part, PatternViolation, Result};

// Matcher system
pub use matcher::{is_allowed, Allowlist, CompiledPattern};
