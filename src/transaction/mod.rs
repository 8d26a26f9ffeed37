//! Smart-contract transactions: drafts, completed transactions, and the
//! generator that stamps send-time fields onto them.

pub mod generator;
pub mod interaction;

pub use generator::ContractTransactionGenerator;
pub use interaction::{ContractFunction, Interaction};

use serde::{Deserialize, Serialize};

use crate::shared::{Address, ChainId};

/// Default gas price, in the smallest denomination.
pub const DEFAULT_GAS_PRICE: u64 = 1_000_000_000;

/// Default transaction version.
pub const DEFAULT_TRANSACTION_VERSION: u32 = 1;

/// A transaction ready to be signed and submitted.
///
/// `data` travels as base64 on the wire, `value` as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub nonce: u64,
    pub value: String,
    pub receiver: Address,
    pub sender: Address,
    pub gas_price: u64,
    pub gas_limit: u64,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "base64_bytes"
    )]
    pub data: Vec<u8>,
    #[serde(rename = "chainID")]
    pub chain_id: ChainId,
    pub version: u32,
}

impl Transaction {
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn set_nonce(&mut self, nonce: u64) {
        self.nonce = nonce;
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn set_chain_id(&mut self, chain_id: ChainId) {
        self.chain_id = chain_id;
    }

    /// The data field as text (`function@arg@arg`).
    pub fn data_str(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
