//! Native authentication: challenge signing, token issuance, token caching.
//!
//! ## Flow
//!
//! 1. Ask the issuer for a challenge (`initialize`).
//! 2. Sign `address ++ challenge` with the account key.
//! 3. Exchange address, challenge and hex signature for a bearer token.
//! 4. Cache the token until one minute before it expires.
//!
//! [`NativeAuthSigner`](signer::NativeAuthSigner) drives the flow; the issuer
//! and the key material are pluggable.

pub mod config;

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "native-auth")]
pub mod native;

#[cfg(feature = "native-auth")]
pub mod signer;

pub use config::{KeySource, NativeAuthClientConfig, NativeAuthSignerConfig};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::error::{ConfigError, SdkResult};
use crate::network::ACCESS_TOKEN_EXPIRY_SKEW_SECONDS;

/// Prefix hashed in front of every signed message.
pub const SIGNED_MESSAGE_PREFIX: &str = "\x17Dharitri Signed Message:\n";

// ============================================================================
// Access token
// ============================================================================

/// A bearer token and the instant after which it must not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub token: String,
    pub expiry_date: DateTime<Utc>,
}

impl AccessToken {
    /// Whether the token stays valid for at least the expiry skew after `now`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now + TimeDelta::seconds(ACCESS_TOKEN_EXPIRY_SKEW_SECONDS) <= self.expiry_date
    }

    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Utc::now())
    }
}

/// `now + expiry_seconds`, failing on values chrono cannot represent.
pub(crate) fn expiry_after(
    now: DateTime<Utc>,
    expiry_seconds: u64,
) -> Result<DateTime<Utc>, ConfigError> {
    i64::try_from(expiry_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| ConfigError::Invalid(format!("expirySeconds out of range: {}", expiry_seconds)))
}

// ============================================================================
// Issuer
// ============================================================================

/// Remote party that hands out challenges and turns signed challenges into tokens.
#[async_trait]
pub trait NativeAuthIssuer: Send + Sync {
    /// Fetch a fresh challenge string.
    async fn initialize(&self) -> SdkResult<String>;

    /// Exchange a signed challenge for a bearer token.
    async fn get_token(
        &self,
        address: &str,
        challenge: &str,
        signature_hex: &str,
    ) -> SdkResult<String>;
}

// ============================================================================
// Signable messages
// ============================================================================

/// The message an account signs to prove it owns `address` for `challenge`.
pub fn signable_message(address: &str, challenge: &str) -> Vec<u8> {
    format!("{}{}", address, challenge).into_bytes()
}

/// Digest actually signed for `message`:
/// keccak256(prefix ++ decimal length ++ message).
pub fn serialize_for_signing(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(SIGNED_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn test_fresh_when_more_than_skew_left() {
        let token = AccessToken {
            token: "t".to_string(),
            expiry_date: at(1_000),
        };
        assert!(token.is_fresh_at(at(1_000 - 61)));
    }

    #[test]
    fn test_fresh_exactly_at_skew_boundary() {
        let token = AccessToken {
            token: "t".to_string(),
            expiry_date: at(1_000),
        };
        assert!(token.is_fresh_at(at(1_000 - 60)));
        assert!(!token.is_fresh_at(at(1_000 - 59)));
    }

    #[test]
    fn test_expired_token_is_stale() {
        let token = AccessToken {
            token: "t".to_string(),
            expiry_date: at(1_000),
        };
        assert!(!token.is_fresh_at(at(2_000)));
    }

    #[test]
    fn test_expiry_after() {
        assert_eq!(expiry_after(at(100), 3600).unwrap(), at(3_700));
        assert!(expiry_after(at(100), u64::MAX).is_err());
    }

    #[test]
    fn test_signable_message_has_no_separator() {
        assert_eq!(signable_message("drt1abc", "xyz.1.2"), b"drt1abcxyz.1.2".to_vec());
    }

    #[test]
    fn test_serialize_for_signing_matches_manual_hash() {
        let message = b"hello";
        let mut expected = Keccak256::new();
        expected.update(b"\x17Dharitri Signed Message:\n5hello");
        let expected: [u8; 32] = expected.finalize().into();
        assert_eq!(serialize_for_signing(message), expected);
    }

    #[test]
    fn test_serialize_for_signing_depends_on_message() {
        assert_ne!(serialize_for_signing(b"a"), serialize_for_signing(b"b"));
    }
}
