//! Low-level HTTP client: `DharitriHttp`.
//!
//! One method per API endpoint. Returns wire types; conversion to SDK types
//! happens in the collaborators that own them. Requests are sent exactly once.

use crate::error::HttpError;
use crate::provider::wire::{AccountResponse, BlockHashResponse, NetworkConfigEnvelope};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the Dharitri API.
#[derive(Debug, Clone)]
pub struct DharitriHttp {
    base_url: String,
    client: Client,
}

impl DharitriHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_headers(base_url, &HashMap::new())
    }

    /// Create a client that sends `headers` with every request.
    pub fn with_headers(
        base_url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Self, HttpError> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| HttpError::BadRequest(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                HttpError::BadRequest(format!("Invalid header value for '{}': {}", name, e))
            })?;
            default_headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(default_headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(DEFAULT_TIMEOUT).pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Blocks ───────────────────────────────────────────────────────────

    /// Hash of the latest block, cached by the API for `ttl_seconds`.
    pub async fn get_latest_block_hash(&self, ttl_seconds: u64) -> Result<String, HttpError> {
        let block: BlockHashResponse = self.get(&self.latest_block_hash_url(ttl_seconds)).await?;
        Ok(block.hash)
    }

    /// Hash of the latest block produced by `shard`.
    pub async fn get_shard_block_hash(&self, shard: u32) -> Result<String, HttpError> {
        let blocks: Vec<BlockHashResponse> = self.get(&self.shard_block_hash_url(shard)).await?;
        blocks
            .into_iter()
            .next()
            .map(|b| b.hash)
            .ok_or_else(|| HttpError::Decode(format!("no block returned for shard {}", shard)))
    }

    fn latest_block_hash_url(&self, ttl_seconds: u64) -> String {
        format!("{}/blocks/latest?ttl={}&fields=hash", self.base_url, ttl_seconds)
    }

    fn shard_block_hash_url(&self, shard: u32) -> String {
        format!("{}/blocks?size=1&fields=hash&shard={}", self.base_url, shard)
    }

    // ── Accounts ─────────────────────────────────────────────────────────

    pub async fn get_account(&self, address: &str) -> Result<AccountResponse, HttpError> {
        let url = format!("{}/accounts/{}", self.base_url, address);
        self.get(&url).await
    }

    // ── Network ──────────────────────────────────────────────────────────

    pub async fn get_network_config(&self) -> Result<NetworkConfigEnvelope, HttpError> {
        let url = format!("{}/network/config", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            }
        };

        Err(status_error(status_code, body_text))
    }
}

/// Map a non-success status code to an [`HttpError`].
fn status_error(status: u16, body: String) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
