//! `NativeAuthSigner`: obtains native-auth bearer tokens for a local account
//! and reuses them until shortly before they expire.

use async_lock::{OnceCell, RwLock};
use chrono::Utc;

use crate::auth::native::UserSigner;
use crate::auth::{
    expiry_after, serialize_for_signing, signable_message, AccessToken, KeySource,
    NativeAuthIssuer, NativeAuthSignerConfig,
};
use crate::error::{ConfigError, SdkResult};

/// Signs native-auth challenges with a configured account key.
///
/// The key is loaded on first use and kept. Tokens are cached in memory;
/// concurrent refreshes are not coalesced, the last one to finish wins.
///
/// Key files are read on a blocking thread pool, so the signer runs on any
/// executor.
pub struct NativeAuthSigner {
    config: NativeAuthSignerConfig,
    issuer: Box<dyn NativeAuthIssuer>,
    user_signer: OnceCell<UserSigner>,
    access_token: RwLock<Option<AccessToken>>,
}

impl NativeAuthSigner {
    /// Create a signer talking to the native-auth API described by `config`.
    #[cfg(feature = "http")]
    pub fn new(config: NativeAuthSignerConfig) -> SdkResult<Self> {
        let issuer = crate::auth::client::NativeAuthClient::new(config.client.clone())?;
        Ok(Self::with_issuer(config, issuer))
    }

    /// Create a signer backed by a custom issuer.
    pub fn with_issuer(config: NativeAuthSignerConfig, issuer: impl NativeAuthIssuer + 'static) -> Self {
        Self {
            config,
            issuer: Box::new(issuer),
            user_signer: OnceCell::new(),
            access_token: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &NativeAuthSignerConfig {
        &self.config
    }

    /// Return a token valid for at least one more minute, issuing a new one
    /// when the cached token is missing or about to expire.
    pub async fn get_token(&self) -> SdkResult<AccessToken> {
        let cached = self.access_token.read().await.clone();
        if let Some(token) = cached.filter(|t| t.is_fresh_at(Utc::now())) {
            tracing::debug!(expiry = %token.expiry_date, "reusing cached native-auth token");
            return Ok(token);
        }

        let token = self.issue_token().await?;
        *self.access_token.write().await = Some(token.clone());
        Ok(token)
    }

    async fn issue_token(&self) -> SdkResult<AccessToken> {
        let user_signer = self.get_user_signer().await?;
        let challenge = self.issuer.initialize().await?;
        let address = user_signer.address().to_bech32();

        let message = signable_message(&address, &challenge);
        let signature = user_signer.sign(&serialize_for_signing(&message))?;

        let token = self
            .issuer
            .get_token(&address, &challenge, &hex::encode(signature))
            .await?;
        let expiry_date = expiry_after(Utc::now(), self.config.client.expiry_seconds)?;

        tracing::info!(%address, expiry = %expiry_date, "issued native-auth token");
        Ok(AccessToken { token, expiry_date })
    }

    async fn get_user_signer(&self) -> SdkResult<&UserSigner> {
        self.user_signer
            .get_or_try_init(|| load_user_signer(&self.config))
            .await
    }
}

async fn load_user_signer(config: &NativeAuthSignerConfig) -> SdkResult<UserSigner> {
    let signer = match config.key_source()? {
        KeySource::Inline(pem) => UserSigner::from_pem(pem)?,
        KeySource::File(path) => {
            let pem = async_fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::KeyFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            UserSigner::from_pem(&pem)?
        }
    };
    tracing::debug!(address = %signer.address(), "loaded native-auth signer");
    Ok(signer)
}
