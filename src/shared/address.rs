//! Bech32 account addresses.

use std::fmt;
use std::str::FromStr;

use bech32::{Bech32, Hrp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;
use crate::network::ADDRESS_HRP;

fn hrp() -> Hrp {
    Hrp::parse_unchecked(ADDRESS_HRP)
}

/// A 32-byte account public key, rendered as a `drt1…` bech32 string.
///
/// Serializes transparently as its bech32 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 32]);

impl Address {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidLength(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn from_bech32(address: &str) -> Result<Self, AddressError> {
        let (hrp, data) = bech32::decode(address).map_err(|e| AddressError::InvalidBech32 {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        let actual = hrp.to_string().to_lowercase();
        if actual != ADDRESS_HRP {
            return Err(AddressError::WrongHrp {
                expected: ADDRESS_HRP.to_string(),
                actual,
            });
        }

        Self::try_from_slice(&data)
    }

    pub fn to_bech32(&self) -> String {
        self.to_string()
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The all-zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = bech32::encode::<Bech32>(hrp(), &self.0).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_bech32())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_bech32(&s).map_err(serde::de::Error::custom)
    }
}
