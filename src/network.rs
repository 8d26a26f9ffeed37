//! Network constants for the Dharitri SDK helpers.

/// Default public API base URL.
pub const DEFAULT_API_URL: &str = "https://api.dharitri.org";

/// Human-readable prefix of bech32 account addresses.
pub const ADDRESS_HRP: &str = "drt";

/// Default requested native-auth token lifetime (one day).
pub const DEFAULT_NATIVE_AUTH_EXPIRY_SECONDS: u64 = 60 * 60 * 24;

/// Lookahead applied before a cached token is considered expired.
pub const ACCESS_TOKEN_EXPIRY_SKEW_SECONDS: i64 = 60;
