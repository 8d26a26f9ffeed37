//! `NativeAuthClient`: issues native-auth challenges and assembles tokens.
//!
//! A challenge is `b64url(origin).blockHash.expirySeconds.b64url(extraInfo)`;
//! a token is `b64url(address).b64url(challenge).signatureHex`.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::auth::{NativeAuthClientConfig, NativeAuthIssuer};
use crate::error::{AuthError, SdkResult};
use crate::http::DharitriHttp;
use crate::shared::encode_base64_url;

/// HTTP-backed [`NativeAuthIssuer`].
#[derive(Debug, Clone)]
pub struct NativeAuthClient {
    config: NativeAuthClientConfig,
    http: DharitriHttp,
}

impl NativeAuthClient {
    pub fn new(config: NativeAuthClientConfig) -> SdkResult<Self> {
        let http = DharitriHttp::with_headers(&config.api_url, &config.extra_request_headers)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &NativeAuthClientConfig {
        &self.config
    }

    /// Fetch a challenge carrying `extra_info` as its last segment.
    pub async fn initialize_with_extra_info(
        &self,
        extra_info: &serde_json::Value,
    ) -> SdkResult<String> {
        let block_hash = self.current_block_hash().await?;
        let extra_info = serde_json::to_string(extra_info)?;
        Ok(encode_challenge(
            &self.config.origin,
            &block_hash,
            self.config.expiry_seconds,
            &extra_info,
        ))
    }

    async fn current_block_hash(&self) -> SdkResult<String> {
        let hash = match self.config.block_hash_shard {
            Some(shard) => self.http.get_shard_block_hash(shard).await?,
            None => {
                self.http
                    .get_latest_block_hash(self.config.expiry_seconds)
                    .await?
            }
        };
        Ok(hash)
    }

    /// Check that `challenge` was minted for this client's origin.
    pub fn validate_origin(&self, challenge: &str) -> SdkResult<()> {
        let origin = decode_challenge_origin(challenge)?;
        if origin != self.config.origin {
            return Err(AuthError::invalid_origin(origin, self.config.origin.clone()).into());
        }
        Ok(())
    }
}

/// `b64url(address).b64url(challenge).signatureHex`.
pub fn build_token(address: &str, challenge: &str, signature_hex: &str) -> String {
    format!(
        "{}.{}.{}",
        encode_base64_url(address),
        encode_base64_url(challenge),
        signature_hex
    )
}

#[async_trait]
impl NativeAuthIssuer for NativeAuthClient {
    async fn initialize(&self) -> SdkResult<String> {
        self.initialize_with_extra_info(&serde_json::json!({})).await
    }

    async fn get_token(
        &self,
        address: &str,
        challenge: &str,
        signature_hex: &str,
    ) -> SdkResult<String> {
        decode_challenge_origin(challenge)?;
        Ok(build_token(address, challenge, signature_hex))
    }
}

/// `b64url(origin).blockHash.expirySeconds.b64url(extraInfo)`.
pub fn encode_challenge(
    origin: &str,
    block_hash: &str,
    expiry_seconds: u64,
    extra_info: &str,
) -> String {
    format!(
        "{}.{}.{}.{}",
        encode_base64_url(origin),
        block_hash,
        expiry_seconds,
        encode_base64_url(extra_info)
    )
}

/// Origin carried by the first segment of a challenge.
pub fn decode_challenge_origin(challenge: &str) -> Result<String, AuthError> {
    let parts: Vec<&str> = challenge.split('.').collect();
    if parts.len() != 4 {
        return Err(AuthError::MalformedChallenge(format!(
            "expected 4 segments, got {}",
            parts.len()
        )));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(parts[0])
        .map_err(|e| AuthError::MalformedChallenge(format!("origin is not base64url: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|_| AuthError::MalformedChallenge("origin is not UTF-8".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;

    fn client(origin: &str) -> NativeAuthClient {
        NativeAuthClient::new(NativeAuthClientConfig {
            origin: origin.to_string(),
            ..NativeAuthClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_encode_challenge_layout() {
        let challenge = encode_challenge("https://app.example", "abc123", 86_400, "{}");
        let parts: Vec<&str> = challenge.split('.').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "aHR0cHM6Ly9hcHAuZXhhbXBsZQ");
        assert_eq!(parts[1], "abc123");
        assert_eq!(parts[2], "86400");
        assert_eq!(parts[3], "e30");
    }

    #[test]
    fn test_decode_challenge_origin() {
        let challenge = encode_challenge("https://app.example", "abc", 60, "{}");
        assert_eq!(
            decode_challenge_origin(&challenge).unwrap(),
            "https://app.example"
        );
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert!(matches!(
            decode_challenge_origin("a.b.c"),
            Err(AuthError::MalformedChallenge(_))
        ));
    }

    #[test]
    fn test_build_token_layout() {
        let challenge = encode_challenge("https://app.example", "abc", 60, "{}");
        let token = build_token("drt1xyz", &challenge, "ff00");

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], encode_base64_url("drt1xyz"));
        assert_eq!(parts[1], encode_base64_url(&challenge));
        assert_eq!(parts[2], "ff00");
    }

    #[test]
    fn test_validate_origin_accepts_own_challenge() {
        let client = client("https://app.example");
        let challenge = encode_challenge("https://app.example", "abc", 60, "{}");
        assert!(client.validate_origin(&challenge).is_ok());
    }

    #[test]
    fn test_validate_origin_rejects_foreign_origin() {
        let client = client("https://app.example");
        let challenge = encode_challenge("https://evil.example", "abc", 60, "{}");
        let err = client.validate_origin(&challenge).unwrap_err();
        match err {
            SdkError::Auth(AuthError::InvalidOrigin { actual, expected }) => {
                assert_eq!(actual, "https://evil.example");
                assert_eq!(expected, "https://app.example");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_get_token_is_local() {
        let client = client("");
        let challenge = encode_challenge("", "abc", 60, "{}");
        let token = client.get_token("drt1xyz", &challenge, "aa").await.unwrap();
        assert!(token.ends_with(".aa"));
    }

    #[tokio::test]
    async fn test_get_token_does_not_check_origin() {
        let client = client("https://app.example");
        let challenge = encode_challenge("https://other.example", "abc", 60, "{}");
        let token = client.get_token("drt1xyz", &challenge, "aa").await.unwrap();
        assert_eq!(token, build_token("drt1xyz", &challenge, "aa"));
    }

    #[tokio::test]
    async fn test_get_token_rejects_malformed_challenge() {
        let client = client("");
        let err = client.get_token("drt1xyz", "not-a-challenge", "aa").await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::MalformedChallenge(_))));
    }
}
