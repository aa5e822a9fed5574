//! Allow-list configuration.
//!
//! [`AllowlistConfig`] is the serializable form of an allow-list, meant to be
//! embedded in a host application's own configuration. Reading files or the
//! environment stays with the host; this module only turns already-loaded
//! text or values into a compiled [`Allowlist`].
//!
//! # Examples
//!
//! ```rust
//! use mxid_allowlist::AllowlistConfig;
//!
//! let config = AllowlistConfig::from_yaml_str(
//!     r#"
//! allowed_users:
//!   - "@admin:example.com"
//!   - "@*:staff.example.com"
//! "#,
//! )?;
//!
//! let allowlist = config.compile()?;
//! assert!(allowlist.is_allowed("@admin:example.com"));
//! # Ok::<(), mxid_allowlist::AllowlistError>(())
//! ```

use crate::compiler::validate_all;
use crate::error::{AllowlistError, Result};
use crate::matcher::Allowlist;
use serde::{Deserialize, Serialize};

/// Serializable allow-list settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowlistConfig {
    /// Patterns of the form `@localpart:domainpart`, each part holding at
    /// most one `*`.
    ///
    /// **Default**: empty (nobody is allowed)
    #[serde(alias = "allowlist")]
    pub allowed_users: Vec<String>,
}

impl AllowlistConfig {
    pub fn new<I, S>(allowed_users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_users: allowed_users.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile the configured patterns, failing on the first invalid one.
    pub fn compile(&self) -> Result<Allowlist> {
        Allowlist::new(&self.allowed_users)
    }

    /// Report every invalid pattern instead of only the first.
    pub fn validate(&self) -> Vec<AllowlistError> {
        validate_all(&self.allowed_users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternViolation;

    #[test]
    fn test_default_config_denies_everyone() {
        let config = AllowlistConfig::default();
        assert!(config.allowed_users.is_empty());

        let allowlist = config.compile().unwrap();
        assert!(allowlist.is_empty());
        assert!(!allowlist.is_allowed("@someone:example.com"));
    }

    #[test]
    fn test_from_yaml_str() {
        let config = AllowlistConfig::from_yaml_str(
            r#"
allowed_users:
  - "@someone:example.com"
  - "@*:example.org"
"#,
        )
        .unwrap();
        assert_eq!(
            config,
            AllowlistConfig::new(["@someone:example.com", "@*:example.org"])
        );
    }

    #[test]
    fn test_from_json_str_with_alias() {
        let config = AllowlistConfig::from_json_str(r#"{"allowlist": ["@bot.*:example.com"]}"#)
            .unwrap();
        let allowlist = config.compile().unwrap();
        assert!(allowlist.is_allowed("@bot.alerts:example.com"));
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config = AllowlistConfig::from_json_str("{}").unwrap();
        assert!(config.allowed_users.is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let err = AllowlistConfig::from_yaml_str("allowed_users: [").unwrap_err();
        assert!(matches!(err, AllowlistError::Config(_)));

        let err = AllowlistConfig::from_json_str(r#"{"allowed_users": 5}"#).unwrap_err();
        assert!(matches!(err, AllowlistError::Config(_)));
    }

    #[test]
    fn test_compile_and_validate_invalid_entries() {
        let config = AllowlistConfig::new(["@ok:example.com", "@someone:", "@:example.com"]);

        let err = config.compile().unwrap_err();
        assert_eq!(err.violation(), Some(PatternViolation::EmptyDomainpart));

        let errors = config.validate();
        let violations: Vec<_> = errors.iter().filter_map(|e| e.violation()).collect();
        assert_eq!(
            violations,
            vec![
                PatternViolation::EmptyDomainpart,
                PatternViolation::EmptyLocalpart
            ]
        );
    }

    #[test]
    fn test_serialize_round_trip_through_yaml() {
        let config = AllowlistConfig::new(["@*:example.com"]);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("allowed_users"));
        assert_eq!(AllowlistConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
