//! Plaintext secret wrapper

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker printed in place of a secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A plaintext secret (e.g. a Windows admin password) that must reach the
/// serialized API model but never a log line.
///
/// `Serialize`/`Deserialize` are transparent; `Debug` and `Display` print
/// [`REDACTED`] for non-empty values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the plaintext value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("\"\"")
        } else {
            f.write_str(REDACTED)
        }
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            f.write_str(REDACTED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_hide_value() {
        let secret = SecretString::new("Sup3rSecret!");
        assert_eq!(format!("{:?}", secret), REDACTED);
        assert_eq!(secret.to_string(), REDACTED);
        assert_eq!(secret.expose(), "Sup3rSecret!");
    }

    #[test]
    fn empty_secret_formats_as_empty() {
        let secret = SecretString::default();
        assert_eq!(format!("{:?}", secret), "\"\"");
        assert_eq!(secret.to_string(), "");
    }

    #[test]
    fn serializes_transparently() {
        let secret = SecretString::new("hunter2\n");
        let json = serde_json::to_string(&secret).expect("serialize");
        assert_eq!(json, "\"hunter2\\n\"");
        let back: SecretString = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, secret);
    }
}
