//! Basic usage of mxid-allowlist.
//!
//! Run with `RUST_LOG=mxid_allowlist=debug` to see compilation logs.

use mxid_allowlist::{AllowlistConfig, AllowlistError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AllowlistError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AllowlistConfig::from_yaml_str(
        r#"
allowed_users:
  - "@admin:example.com"
  - "@bot.*:example.com"
  - "@*:staff.example.com"
"#,
    )?;

    let allowlist = config.compile()?;
    println!("Compiled {} patterns", allowlist.len());
    for pattern in &allowlist {
        println!("  {pattern} -> {}", pattern.as_str());
    }

    for user in [
        "@admin:example.com",
        "@bot.ci:example.com",
        "@carol:staff.example.com",
        "@mallory:example.org",
    ] {
        match allowlist.matching_pattern(user) {
            Some(pattern) => println!("{user}: allowed by {pattern}"),
            None => println!("{user}: denied"),
        }
    }

    // Report every bad entry at once rather than stopping at the first.
    let broken = AllowlistConfig::new(["@someone", "someone:example.com", "@ok:example.com"]);
    for error in broken.validate() {
        println!("config error: {error}");
    }

    Ok(())
}
