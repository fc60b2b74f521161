//! Secret handling utilities.
//!
//! Re-exports secrecy types and provides the redaction helpers used when
//! a configuration is displayed.

pub use secrecy::{ExposeSecret, SecretString};

/// Placeholder shown instead of a secret value.
pub const REDACTED: &str = "********";

/// `"set"` / `"unset"` for an optional credential. Empty counts as unset.
pub fn presence(secret: Option<&SecretString>) -> &'static str {
    if is_present(secret) { "set" } else { "unset" }
}

/// True when the credential exists and is non-empty.
pub fn is_present(secret: Option<&SecretString>) -> bool {
    secret.is_some_and(|s| !s.expose_secret().is_empty())
}
