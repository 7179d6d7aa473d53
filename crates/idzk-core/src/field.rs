//! # Field Elements
//!
//! Every witness value consumed by the prover is an element of the BN254
//! scalar field, written as a base-10 string. This module holds the field
//! modulus and the two helpers the rest of the crate builds on: a strict
//! decimal parser and an in-field check.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::error::ValidationError;

/// Decimal rendering of the BN254 scalar field modulus.
pub const FIELD_MODULUS_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

// Little-endian u32 limbs of the modulus.
const FIELD_MODULUS_LIMBS: [u32; 8] = [
    0xf000_0001,
    0x43e1_f593,
    0x79b9_7091,
    0x2833_e848,
    0x8181_585d,
    0xb850_45b6,
    0xe131_a029,
    0x3064_4e72,
];

/// The BN254 scalar field modulus.
pub fn field_modulus() -> &'static BigUint {
    static MODULUS: OnceLock<BigUint> = OnceLock::new();
    MODULUS.get_or_init(|| BigUint::from_slice(&FIELD_MODULUS_LIMBS))
}

/// Whether `value` is a canonical field element (strictly below the modulus).
pub fn in_field(value: &BigUint) -> bool {
    value < field_modulus()
}

/// Reject `value` if it is not a canonical field element.
///
/// `what` names the checked value in the resulting error.
pub fn check_in_field(what: &str, value: &BigUint) -> Result<(), ValidationError> {
    if in_field(value) {
        Ok(())
    } else {
        Err(ValidationError::NotInField {
            what: what.to_string(),
            value: value.to_str_radix(10),
        })
    }
}

/// Parse an unsigned base-10 integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no digit
/// separators. The prover emits nothing else, so anything else indicates a
/// corrupted or foreign signal.
pub fn parse_decimal(s: &str) -> Result<BigUint, ValidationError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidDecimal(s.to_string()));
    }
    BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| ValidationError::InvalidDecimal(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn modulus_limbs_match_decimal() {
        assert_eq!(field_modulus().to_str_radix(10), FIELD_MODULUS_DECIMAL);
    }

    #[test]
    fn zero_is_in_field() {
        assert!(in_field(&BigUint::zero()));
    }

    #[test]
    fn modulus_minus_one_is_in_field() {
        let max = field_modulus() - BigUint::one();
        assert!(check_in_field("max", &max).is_ok());
    }

    #[test]
    fn modulus_is_not_in_field() {
        let err = check_in_field("hash", field_modulus()).unwrap_err();
        assert!(matches!(err, ValidationError::NotInField { ref what, .. } if what == "hash"));
    }

    #[test]
    fn parse_decimal_accepts_digits() {
        assert_eq!(parse_decimal("12345").unwrap(), BigUint::from(12345u32));
        assert_eq!(parse_decimal("0").unwrap(), BigUint::zero());
        assert_eq!(parse_decimal("007").unwrap(), BigUint::from(7u32));
    }

    #[test]
    fn parse_decimal_rejects_non_digits() {
        for bad in ["", "abc", "-1", "+1", "1_000", " 1", "1.5", "0x10"] {
            assert!(
                matches!(parse_decimal(bad), Err(ValidationError::InvalidDecimal(_))),
                "accepted {bad:?}"
            );
        }
    }
}
