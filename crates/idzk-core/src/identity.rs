//! # Identity Identifiers
//!
//! An [`Id`] is the protocol-level identity: 31 bytes laid out as
//!
//! ```text
//! [  type  | genesis root | checksum ]
//! [2 bytes |   27 bytes   |  2 bytes ]
//! ```
//!
//! The checksum is the wrapping `u16` sum of the type and genesis bytes,
//! stored big-endian. The circuit sees the identity as the little-endian
//! integer of all 31 bytes; people see it as a base58 string.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::field::parse_decimal;

/// Byte length of an [`Id`].
pub const ID_LEN: usize = 31;

/// Byte length of the identity type prefix.
pub const ID_TYPE_LEN: usize = 2;

/// Byte length of the genesis root segment.
pub const ID_GENESIS_LEN: usize = 27;

/// A protocol identity identifier. Immutable once constructed; every
/// constructor verifies the checksum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id([u8; ID_LEN]);

/// Compute the checksum for a type prefix and genesis root.
pub fn calculate_checksum(typ: [u8; ID_TYPE_LEN], genesis: &[u8; ID_GENESIS_LEN]) -> [u8; 2] {
    let sum = typ
        .iter()
        .chain(genesis.iter())
        .fold(0u16, |acc, b| acc.wrapping_add(u16::from(*b)));
    sum.to_be_bytes()
}

impl Id {
    /// Build an identity from its type prefix and genesis root, computing
    /// the checksum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] if the resulting identity is all
    /// zeros.
    pub fn new(typ: [u8; ID_TYPE_LEN], genesis: [u8; ID_GENESIS_LEN]) -> Result<Self, ValidationError> {
        let checksum = calculate_checksum(typ, &genesis);
        let mut bytes = [0u8; ID_LEN];
        bytes[..ID_TYPE_LEN].copy_from_slice(&typ);
        bytes[ID_TYPE_LEN..ID_TYPE_LEN + ID_GENESIS_LEN].copy_from_slice(&genesis);
        bytes[ID_TYPE_LEN + ID_GENESIS_LEN..].copy_from_slice(&checksum);
        Self::from_bytes(&bytes)
    }

    /// Parse an identity from its 31 raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        let bytes: [u8; ID_LEN] = bytes
            .try_into()
            .map_err(|_| ValidationError::InvalidIdLength(bytes.len()))?;
        if bytes == [0u8; ID_LEN] {
            return Err(ValidationError::EmptyId);
        }
        let id = Self(bytes);
        let expected = calculate_checksum(id.id_type(), &id.genesis());
        let actual = id.checksum();
        if expected != actual {
            return Err(ValidationError::InvalidIdChecksum { expected, actual });
        }
        Ok(id)
    }

    /// Parse an identity from its little-endian integer form.
    pub fn from_big_int(value: &BigUint) -> Result<Self, ValidationError> {
        let le = value.to_bytes_le();
        if le.len() > ID_LEN {
            return Err(ValidationError::IdOverflow(value.to_str_radix(10)));
        }
        let mut bytes = [0u8; ID_LEN];
        bytes[..le.len()].copy_from_slice(&le);
        Self::from_bytes(&bytes)
    }

    /// Parse an identity from the base-10 rendering of its integer form.
    pub fn from_decimal_str(s: &str) -> Result<Self, ValidationError> {
        Self::from_big_int(&parse_decimal(s)?)
    }

    /// Parse an identity from its base58 display string.
    pub fn from_base58(s: &str) -> Result<Self, ValidationError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| ValidationError::InvalidBase58 {
                value: s.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_bytes(&bytes)
    }

    /// The little-endian integer form used inside circuits.
    pub fn to_big_int(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }

    /// The base58 display string.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// The two-byte identity type prefix.
    pub fn id_type(&self) -> [u8; ID_TYPE_LEN] {
        [self.0[0], self.0[1]]
    }

    /// The 27-byte genesis root segment.
    pub fn genesis(&self) -> [u8; ID_GENESIS_LEN] {
        let mut genesis = [0u8; ID_GENESIS_LEN];
        genesis.copy_from_slice(&self.0[ID_TYPE_LEN..ID_TYPE_LEN + ID_GENESIS_LEN]);
        genesis
    }

    /// The stored checksum.
    pub fn checksum(&self) -> [u8; 2] {
        [self.0[ID_LEN - 2], self.0[ID_LEN - 1]]
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.to_base58())
    }
}

impl FromStr for Id {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(serde::de::Error::custom)
    }
}
