//! Error types for the mxid-allowlist crate.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AllowlistError>;

/// One of the two halves of an MXID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Localpart,
    Domainpart,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Localpart => write!(f, "localpart"),
            Part::Domainpart => write!(f, "domainpart"),
        }
    }
}

/// The structural rule a rejected pattern broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternViolation {
    MissingAt,
    MultipleAt,
    MissingDelimiter,
    MultipleDelimiters,
    EmptyLocalpart,
    EmptyDomainpart,
    MultipleWildcards { part: Part },
}

impl fmt::Display for PatternViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternViolation::MissingAt => write!(f, "pattern must start with '@'"),
            PatternViolation::MultipleAt => write!(f, "pattern must contain exactly one '@'"),
            PatternViolation::MissingDelimiter => {
                write!(f, "pattern must contain a ':' between localpart and domainpart")
            }
            PatternViolation::MultipleDelimiters => {
                write!(f, "pattern must contain exactly one ':'")
            }
            PatternViolation::EmptyLocalpart => write!(f, "pattern has an empty localpart"),
            PatternViolation::EmptyDomainpart => write!(f, "pattern has an empty domainpart"),
            PatternViolation::MultipleWildcards { part } => {
                write!(f, "pattern {part} contains more than one '*'")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllowlistError {
    /// A pattern failed structural validation and produced no matcher.
    #[error("Invalid pattern `{pattern}`: {violation}")]
    InvalidPattern {
        pattern: String,
        violation: PatternViolation,
    },

    /// The generated expression was refused by the regex engine.
    #[error("Invalid regex generated for pattern `{pattern}`: {message}")]
    InvalidRegex { pattern: String, message: String },

    /// An allow-list document could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AllowlistError {
    pub(crate) fn invalid(pattern: &str, violation: PatternViolation) -> Self {
        AllowlistError::InvalidPattern {
            pattern: pattern.to_string(),
            violation,
        }
    }

    /// The structural violation, if this is a pattern error.
    pub fn violation(&self) -> Option<PatternViolation> {
        match self {
            AllowlistError::InvalidPattern { violation, .. } => Some(*violation),
            AllowlistError::InvalidRegex { .. } | AllowlistError::Config(_) => None,
        }
    }

    /// The offending pattern string, if this is a pattern error.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            AllowlistError::InvalidPattern { pattern, .. }
            | AllowlistError::InvalidRegex { pattern, .. } => Some(pattern),
            AllowlistError::Config(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for AllowlistError {
    fn from(err: serde_yaml::Error) -> Self {
        AllowlistError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AllowlistError {
    fn from(err: serde_json::Error) -> Self {
        AllowlistError::Config(err.to_string())
    }
}
