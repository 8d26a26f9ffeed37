//! `ContractTransactionGenerator`: completes contract-call drafts with the
//! sender nonce and chain id right before submission.

use async_lock::OnceCell;

use crate::error::{SdkError, SdkResult};
use crate::provider::{NetworkConfig, NetworkProvider};
use crate::shared::Address;
use crate::transaction::{Interaction, Transaction};

/// Builds submittable transactions from [`Interaction`] drafts.
///
/// The network config is fetched once and kept for the generator's lifetime.
/// It is never refreshed, so a generator must not outlive a chain config change.
pub struct ContractTransactionGenerator {
    provider: Box<dyn NetworkProvider>,
    network_config: OnceCell<NetworkConfig>,
}

impl ContractTransactionGenerator {
    pub fn new(provider: impl NetworkProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn NetworkProvider>) -> Self {
        Self {
            provider,
            network_config: OnceCell::new(),
        }
    }

    /// Build the transaction for `interaction` and stamp the current nonce of
    /// `signer` and the network chain id onto it.
    ///
    /// Errors are logged with the contract and function and returned as-is.
    pub async fn create_transaction(
        &self,
        interaction: &Interaction,
        signer: &Address,
    ) -> SdkResult<Transaction> {
        match self.fill(interaction, signer).await {
            Ok(transaction) => Ok(transaction),
            Err(e) => {
                tracing::error!(
                    contract = %interaction.contract_address(),
                    function = %interaction.function(),
                    error = %e,
                    "Unexpected error when trying to create transaction"
                );
                Err(e)
            }
        }
    }

    async fn fill(&self, interaction: &Interaction, signer: &Address) -> SdkResult<Transaction> {
        let mut transaction = interaction.build_transaction()?;

        let account = self.provider.get_account(signer).await?;
        transaction.set_nonce(account.nonce);

        let network_config = self.get_network_config().await?;
        transaction.set_chain_id(network_config.chain_id);

        Ok(transaction)
    }

    /// The memoized network config. A failed fetch is not cached.
    pub async fn get_network_config(&self) -> SdkResult<NetworkConfig> {
        let config = self
            .network_config
            .get_or_try_init(|| self.load_network_config())
            .await?;
        Ok(config.clone())
    }

    async fn load_network_config(&self) -> SdkResult<NetworkConfig> {
        self.provider.get_network_config().await.map_err(|e| {
            tracing::error!(error = %e, "Unexpected error when trying to load network config");
            SdkError::NetworkConfigUnavailable(Box::new(e))
        })
    }
}
