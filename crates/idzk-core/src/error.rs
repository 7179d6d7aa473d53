//! # Error Hierarchy
//!
//! Validation errors for the protocol primitives, built with `thiserror`.
//! Every constructor that accepts external data checks it up front, so a
//! value that exists is a value the prover can consume.

use thiserror::Error;

/// Validation errors for protocol primitive types.
///
/// Each variant carries the rejected input (or its size) so that a caller
/// can diagnose a version or encoding mismatch without re-running the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not an element of the BN254 scalar field.
    #[error("{what} is not inside the finite field: {value}")]
    NotInField {
        /// The kind of value that was checked (e.g. "hash", "claim slot 3").
        what: String,
        /// Decimal rendering of the rejected value.
        value: String,
    },

    /// The string is not a canonical base-10 unsigned integer.
    #[error("invalid decimal integer: \"{0}\"")]
    InvalidDecimal(String),

    /// Identity bytes have the wrong length.
    #[error("invalid ID length: expected 31 bytes, got {0}")]
    InvalidIdLength(usize),

    /// The all-zero identity is reserved and never valid.
    #[error("ID is empty")]
    EmptyId,

    /// Identity checksum does not match its type and genesis bytes.
    #[error("invalid ID checksum: expected {expected:02x?}, got {actual:02x?}")]
    InvalidIdChecksum {
        /// Checksum recomputed from the type and genesis bytes.
        expected: [u8; 2],
        /// Checksum carried by the identity.
        actual: [u8; 2],
    },

    /// The integer does not fit into the 31-byte identity representation.
    #[error("integer does not fit into an ID: {0}")]
    IdOverflow(String),

    /// The display string is not valid base58.
    #[error("invalid base58 ID string \"{value}\": {reason}")]
    InvalidBase58 {
        /// The string that failed to decode.
        value: String,
        /// Decoder failure description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_in_field_display_names_value() {
        let err = ValidationError::NotInField {
            what: "hash".to_string(),
            value: "99".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("hash"));
        assert!(msg.contains("99"));
    }

    #[test]
    fn invalid_id_length_display() {
        let err = ValidationError::InvalidIdLength(30);
        assert!(format!("{err}").contains("got 30"));
    }

    #[test]
    fn checksum_display_shows_both_sides() {
        let err = ValidationError::InvalidIdChecksum {
            expected: [0x01, 0x02],
            actual: [0x03, 0x04],
        };
        let msg = format!("{err}");
        assert!(msg.contains("01"));
        assert!(msg.contains("04"));
    }
}
