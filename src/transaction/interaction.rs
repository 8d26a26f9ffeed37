//! Fluent builder for smart-contract calls.

use crate::error::{SdkError, SdkResult};
use crate::shared::{Address, ChainId};
use crate::transaction::{Transaction, DEFAULT_GAS_PRICE, DEFAULT_TRANSACTION_VERSION};

/// Name of an endpoint exposed by a smart contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractFunction(String);

impl ContractFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContractFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContractFunction {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A draft contract call. The nonce and chain id are normally stamped later
/// by [`ContractTransactionGenerator`](crate::transaction::ContractTransactionGenerator).
///
/// # Example
///
/// ```rust,ignore
/// let interaction = Interaction::new(contract, ContractFunction::new("claim"))
///     .with_argument_u64(5)
///     .with_gas_limit(20_000_000);
/// let tx = generator.create_transaction(&interaction, &signer).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Interaction {
    contract: Address,
    function: ContractFunction,
    arguments: Vec<Vec<u8>>,
    sender: Address,
    value: String,
    gas_limit: u64,
    gas_price: u64,
    nonce: u64,
    chain_id: ChainId,
    version: u32,
}

impl Interaction {
    pub fn new(contract: Address, function: ContractFunction) -> Self {
        Self {
            contract,
            function,
            arguments: Vec::new(),
            sender: Address::default(),
            value: "0".to_string(),
            gas_limit: 0,
            gas_price: DEFAULT_GAS_PRICE,
            nonce: 0,
            chain_id: ChainId::default(),
            version: DEFAULT_TRANSACTION_VERSION,
        }
    }

    pub fn contract_address(&self) -> &Address {
        &self.contract
    }

    pub fn function(&self) -> &ContractFunction {
        &self.function
    }

    /// Append a raw top-level encoded argument.
    pub fn with_argument(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.arguments.push(bytes.into());
        self
    }

    /// Append an unsigned integer, big-endian with leading zeros stripped.
    pub fn with_argument_u64(self, value: u64) -> Self {
        let bytes = value.to_be_bytes();
        let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        self.with_argument(bytes[first..].to_vec())
    }

    pub fn with_argument_address(self, address: &Address) -> Self {
        self.with_argument(address.as_bytes().to_vec())
    }

    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = sender;
        self
    }

    /// Amount transferred with the call, as a decimal string.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_chain_id(mut self, chain_id: impl Into<ChainId>) -> Self {
        self.chain_id = chain_id.into();
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Data field: `function@hex(arg)@hex(arg)…`.
    pub fn data(&self) -> Vec<u8> {
        let mut data = self.function.name().to_string();
        for argument in &self.arguments {
            data.push('@');
            data.push_str(&hex::encode(argument));
        }
        data.into_bytes()
    }

    /// Build the transaction described by this draft.
    ///
    /// Fails if the function name is empty or no gas limit was set.
    pub fn build_transaction(&self) -> SdkResult<Transaction> {
        if self.function.name().is_empty() {
            return Err(SdkError::Validation(
                "contract function name is empty".to_string(),
            ));
        }
        if self.gas_limit == 0 {
            return Err(SdkError::Validation(format!(
                "gas limit not set for '{}'",
                self.function
            )));
        }

        Ok(Transaction {
            nonce: self.nonce,
            value: self.value.clone(),
            receiver: self.contract,
            sender: self.sender,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            data: self.data(),
            chain_id: self.chain_id.clone(),
            version: self.version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> Address {
        Address::from_bytes([5u8; 32])
    }

    #[test]
    fn test_data_encoding() {
        let interaction = Interaction::new(contract(), ContractFunction::new("dummy"))
            .with_argument_u64(10)
            .with_argument(b"ab".to_vec())
            .with_argument_u64(0);
        assert_eq!(interaction.data(), b"dummy@0a@6162@".to_vec());
    }

    #[test]
    fn test_no_arguments() {
        let interaction = Interaction::new(contract(), ContractFunction::new("ping"));
        assert_eq!(interaction.data(), b"ping".to_vec());
    }

    #[test]
    fn test_build_transaction_copies_draft() {
        let sender = Address::from_bytes([6u8; 32]);
        let tx = Interaction::new(contract(), ContractFunction::new("dummy"))
            .with_nonce(7)
            .with_gas_limit(20_000_000)
            .with_sender(sender)
            .with_value("1000")
            .build_transaction()
            .unwrap();

        assert_eq!(tx.nonce, 7);
        assert_eq!(tx.gas_limit, 20_000_000);
        assert_eq!(tx.gas_price, DEFAULT_GAS_PRICE);
        assert_eq!(tx.receiver, contract());
        assert_eq!(tx.sender, sender);
        assert_eq!(tx.value, "1000");
        assert!(tx.chain_id.is_empty());
    }

    #[test]
    fn test_build_without_gas_limit_fails() {
        let err = Interaction::new(contract(), ContractFunction::new("dummy"))
            .build_transaction()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_build_with_empty_function_fails() {
        let err = Interaction::new(contract(), ContractFunction::new(""))
            .with_gas_limit(1)
            .build_transaction()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
