//! # Merkle Hashes
//!
//! [`Hash`] is a node hash of the identity Merkle trees: a field element
//! stored as 32 little-endian bytes. Hashes render as base-10 strings, which
//! is the form the prover expects for every witness value.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::field::{check_in_field, parse_decimal};

/// Byte length of a [`Hash`].
pub const HASH_LEN: usize = 32;

/// A Merkle tree node hash.
///
/// Always a canonical field element: every constructor rejects values at
/// or above the field modulus.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; HASH_LEN]);

impl Hash {
    /// The zero hash, used for empty subtrees and padding.
    pub const ZERO: Hash = Hash([0u8; HASH_LEN]);

    /// Construct from 32 little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotInField`] if the bytes encode a value
    /// outside the field.
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Result<Self, ValidationError> {
        check_in_field("hash", &BigUint::from_bytes_le(&bytes))?;
        Ok(Self(bytes))
    }

    /// Construct from a big integer.
    pub fn from_big_int(value: &BigUint) -> Result<Self, ValidationError> {
        check_in_field("hash", value)?;
        let mut bytes = [0u8; HASH_LEN];
        let le = value.to_bytes_le();
        bytes[..le.len()].copy_from_slice(&le);
        Ok(Self(bytes))
    }

    /// Construct from a base-10 string.
    pub fn from_decimal_str(s: &str) -> Result<Self, ValidationError> {
        Self::from_big_int(&parse_decimal(s)?)
    }

    /// The raw little-endian bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// The hash as a big integer.
    pub fn to_big_int(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }

    /// Whether this is the zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_LEN]
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_big_int())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_big_int())
    }
}

impl FromStr for Hash {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}
