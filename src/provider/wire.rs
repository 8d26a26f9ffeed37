//! Wire types for the account and network endpoints.

use serde::{Deserialize, Serialize};

use crate::provider::{AccountOnNetwork, NetworkConfig};
use crate::shared::{Address, ChainId};

/// `GET /blocks/latest?fields=hash` (and each element of `GET /blocks?fields=hash`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockHashResponse {
    pub hash: String,
}

/// `GET /accounts/{address}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub address: Address,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub balance: String,
}

impl From<AccountResponse> for AccountOnNetwork {
    fn from(resp: AccountResponse) -> Self {
        Self {
            address: resp.address,
            nonce: resp.nonce,
            balance: resp.balance,
        }
    }
}

/// `GET /network/config`: gateway envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfigEnvelope {
    pub data: NetworkConfigData,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfigData {
    pub config: NetworkConfigResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfigResponse {
    pub drt_chain_id: String,
    #[serde(default)]
    pub drt_gas_per_data_byte: u64,
    #[serde(default)]
    pub drt_min_gas_limit: u64,
    #[serde(default)]
    pub drt_min_gas_price: u64,
    #[serde(default)]
    pub drt_min_transaction_version: u32,
}

impl From<NetworkConfigEnvelope> for NetworkConfig {
    fn from(envelope: NetworkConfigEnvelope) -> Self {
        let config = envelope.data.config;
        Self {
            chain_id: ChainId::from(config.drt_chain_id),
            gas_per_data_byte: config.drt_gas_per_data_byte,
            min_gas_limit: config.drt_min_gas_limit,
            min_gas_price: config.drt_min_gas_price,
            min_transaction_version: config.drt_min_transaction_version,
        }
    }
}
