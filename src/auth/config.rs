//! Native-auth configuration.
//!
//! Both structs deserialize from camelCase JSON with every field optional;
//! missing fields take the defaults below.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SdkResult};
use crate::network::{DEFAULT_API_URL, DEFAULT_NATIVE_AUTH_EXPIRY_SECONDS};

/// Settings of the native-auth issuer client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NativeAuthClientConfig {
    /// Origin embedded in every challenge.
    pub origin: String,
    pub api_url: String,
    /// Token lifetime requested from the issuer.
    pub expiry_seconds: u64,
    /// Take the block hash from this shard instead of the latest block.
    pub block_hash_shard: Option<u32>,
    pub extra_request_headers: HashMap<String, String>,
}

impl Default for NativeAuthClientConfig {
    fn default() -> Self {
        Self {
            origin: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            expiry_seconds: DEFAULT_NATIVE_AUTH_EXPIRY_SECONDS,
            block_hash_shard: None,
            extra_request_headers: HashMap::new(),
        }
    }
}

/// Settings of [`NativeAuthSigner`](crate::auth::signer::NativeAuthSigner):
/// the client settings plus where the account key comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NativeAuthSignerConfig {
    #[serde(flatten)]
    pub client: NativeAuthClientConfig,
    pub signer_private_key_path: Option<PathBuf>,
    /// Inline PEM. Takes precedence over `signer_private_key_path`.
    pub private_key: Option<String>,
}

/// Where the signing key is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource<'a> {
    Inline(&'a str),
    File(&'a Path),
}

impl NativeAuthSignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object, overlaying its fields onto the defaults.
    pub fn from_json(json: &str) -> SdkResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.client.origin = origin.into();
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.client.api_url = url.into();
        self
    }

    pub fn expiry_seconds(mut self, seconds: u64) -> Self {
        self.client.expiry_seconds = seconds;
        self
    }

    pub fn block_hash_shard(mut self, shard: u32) -> Self {
        self.client.block_hash_shard = Some(shard);
        self
    }

    pub fn extra_request_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.client
            .extra_request_headers
            .insert(name.into(), value.into());
        self
    }

    pub fn private_key(mut self, pem: impl Into<String>) -> Self {
        self.private_key = Some(pem.into());
        self
    }

    pub fn signer_private_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.signer_private_key_path = Some(path.into());
        self
    }

    /// Resolve the key source. Inline key wins; empty values count as unset.
    pub fn key_source(&self) -> Result<KeySource<'_>, ConfigError> {
        if let Some(pem) = self.private_key.as_deref().filter(|s| !s.is_empty()) {
            return Ok(KeySource::Inline(pem));
        }
        if let Some(path) = self
            .signer_private_key_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
        {
            return Ok(KeySource::File(path));
        }
        Err(ConfigError::MissingKeySource)
    }
}
