//! Unified SDK error types.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The network config could not be fetched. The cause is kept as `source()`.
    #[error("Error when loading network config")]
    NetworkConfigUnavailable(#[source] Box<SdkError>),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// HTTP-layer errors raised by the upstream collaborators.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Native-auth errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The origin carried by a native-auth token does not match the accepted one.
    #[error("Invalid origin '{actual}'. should be '{expected}'")]
    InvalidOrigin { actual: String, expected: String },

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Malformed challenge: {0}")]
    MalformedChallenge(String),
}

impl AuthError {
    pub fn invalid_origin(actual: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidOrigin {
            actual: actual.into(),
            expected: expected.into(),
        }
    }
}

/// Operator-facing configuration errors. Never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing PrivateKey and SignerPrivateKeyPath in NativeAuthSigner.")]
    MissingKeySource,

    #[error("Cannot read key file {}: {source}", .path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid PEM: {0}")]
    InvalidPem(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("{0}")]
    Invalid(String),
}

/// Bech32 address errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid bech32 address '{address}': {reason}")]
    InvalidBech32 { address: String, reason: String },

    #[error("Wrong address prefix: expected '{expected}', got '{actual}'")]
    WrongHrp { expected: String, actual: String },

    #[error("Invalid address length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}
