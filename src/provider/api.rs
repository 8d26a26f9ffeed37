//! `ApiNetworkProvider`: [`NetworkProvider`] backed by the public REST API.

use async_trait::async_trait;

use crate::error::SdkResult;
use crate::http::DharitriHttp;
use crate::provider::{AccountOnNetwork, NetworkConfig, NetworkProvider};
use crate::shared::Address;

#[derive(Debug, Clone)]
pub struct ApiNetworkProvider {
    http: DharitriHttp,
}

impl ApiNetworkProvider {
    pub fn new(api_url: &str) -> SdkResult<Self> {
        Ok(Self {
            http: DharitriHttp::new(api_url)?,
        })
    }

    pub fn from_http(http: DharitriHttp) -> Self {
        Self { http }
    }

    pub fn url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl NetworkProvider for ApiNetworkProvider {
    async fn get_account(&self, address: &Address) -> SdkResult<AccountOnNetwork> {
        let resp = self.http.get_account(&address.to_bech32()).await?;
        Ok(resp.into())
    }

    async fn get_network_config(&self) -> SdkResult<NetworkConfig> {
        let envelope = self.http.get_network_config().await?;
        Ok(envelope.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::DEFAULT_API_URL;

    #[test]
    fn test_new_keeps_url() {
        let provider = ApiNetworkProvider::new(DEFAULT_API_URL).unwrap();
        assert_eq!(provider.url(), DEFAULT_API_URL);
    }
}
