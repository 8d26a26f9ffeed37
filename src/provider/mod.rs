//! Network-state collaborator: account lookups and chain configuration.

#[cfg(feature = "http")]
pub mod api;
pub mod wire;

#[cfg(feature = "http")]
pub use api::ApiNetworkProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SdkResult;
use crate::shared::{Address, ChainId};

/// An account as currently seen by the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOnNetwork {
    pub address: Address,
    pub nonce: u64,
    pub balance: String,
}

/// Chain parameters needed to build a valid transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: ChainId,
    pub gas_per_data_byte: u64,
    pub min_gas_limit: u64,
    pub min_gas_price: u64,
    pub min_transaction_version: u32,
}

/// Source of on-chain account state and network configuration.
///
/// Each call is one round trip; implementations must not retry.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    async fn get_account(&self, address: &Address) -> SdkResult<AccountOnNetwork>;

    async fn get_network_config(&self) -> SdkResult<NetworkConfig>;
}
