//! # Dharitri SDK helpers
//!
//! Small building blocks for hosts talking to a Dharitri network.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Addresses, chain ids, URL helpers, error types (always available)
//! 2. **HTTP**: `DharitriHttp`, one method per API endpoint, no retries
//! 3. **Collaborators**: `NetworkProvider` and `NativeAuthIssuer` traits with
//!    HTTP implementations
//! 4. **Auth**: `NativeAuthSigner`, challenge signing with a cached bearer token
//! 5. **Transactions**: `ContractTransactionGenerator` stamps nonce and chain id
//!    onto contract-call drafts
//!
//! ## Features
//!
//! - `http` (default): `DharitriHttp` and the HTTP collaborators. reqwest is
//!   built without a TLS backend, so the default `https://` API is only
//!   reachable with `native` or another reqwest TLS feature enabled.
//! - `native-auth` (default): `UserSigner` and `NativeAuthSigner`.
//! - `native`: both of the above plus `reqwest/rustls-tls`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dharitri_sdk_helpers::prelude::*;
//!
//! let signer = NativeAuthSigner::new(
//!     NativeAuthSignerConfig::new()
//!         .origin("https://app.example")
//!         .signer_private_key_path("/keys/signer.pem"),
//! )?;
//! let token = signer.get_token().await?;
//!
//! let generator = ContractTransactionGenerator::new(ApiNetworkProvider::new(DEFAULT_API_URL)?);
//! let interaction = Interaction::new(contract, ContractFunction::new("claim"))
//!     .with_gas_limit(20_000_000);
//! let tx = generator.create_transaction(&interaction, &sender).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and utilities.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

/// Controller-level interceptor markers.
pub mod interceptors;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Collaborators ───────────────────────────────────────────────────

/// Account and network-config lookups.
pub mod provider;

// ── Layer 4: Auth ────────────────────────────────────────────────────────────

/// Native authentication: issuer, signing, token cache.
pub mod auth;

// ── Layer 5: Transactions ────────────────────────────────────────────────────

/// Contract-call drafts and send-time field completion.
pub mod transaction;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{is_localhost, Address, ChainId};

    // Errors
    pub use crate::error::{AddressError, AuthError, ConfigError, HttpError, SdkError, SdkResult};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Interceptors
    pub use crate::interceptors::{ControllerRegistry, DisableFieldsInterceptorOnControllerOptions};

    // Collaborators
    pub use crate::auth::NativeAuthIssuer;
    pub use crate::provider::{AccountOnNetwork, NetworkConfig, NetworkProvider};
    #[cfg(feature = "http")]
    pub use crate::auth::client::NativeAuthClient;
    #[cfg(feature = "http")]
    pub use crate::provider::ApiNetworkProvider;

    // Auth
    pub use crate::auth::{AccessToken, NativeAuthClientConfig, NativeAuthSignerConfig};
    #[cfg(feature = "native-auth")]
    pub use crate::auth::native::UserSigner;
    #[cfg(feature = "native-auth")]
    pub use crate::auth::signer::NativeAuthSigner;

    // Transactions
    pub use crate::transaction::{
        ContractFunction, ContractTransactionGenerator, Interaction, Transaction,
    };
}
