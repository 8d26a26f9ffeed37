//! Shared newtypes and utilities used across all modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod address;
pub mod url;

pub use address::Address;
pub use url::is_localhost;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ChainId ─────────────────────────────────────────────────────────────────

/// Identifier of the network a transaction is valid for (e.g. `"D"`, `"T"`, `"1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ChainId(String);

impl ChainId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChainId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ChainId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ChainId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ChainId(s.to_string()))
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ChainId(s))
    }
}

// ─── Base64url ───────────────────────────────────────────────────────────────

/// Unpadded URL-safe base64, the encoding used inside native-auth tokens.
pub fn encode_base64_url(value: &str) -> String {
    use base64::Engine;
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(value.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_serde_transparent() {
        let id = ChainId::from("D");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"D\"");
        let back: ChainId = serde_json::from_str("\"T\"").unwrap();
        assert_eq!(back.as_str(), "T");
    }

    #[test]
    fn test_base64_url_has_no_padding_or_unsafe_chars() {
        let encoded = encode_base64_url("https://localhost:3000??>");
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }
}
