//! # Claims
//!
//! A [`Claim`] is the fixed-width leaf payload of an identity's claims tree:
//! four index slots followed by four value slots, each a field element
//! stored as 32 little-endian bytes. This crate does not interpret slot
//! contents; it only guarantees they are valid field elements and renders
//! them the way the prover expects, a JSON array of eight decimal strings.

use num_bigint::BigUint;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::field::{check_in_field, parse_decimal};

/// Number of index slots in a claim.
pub const CLAIM_INDEX_SLOTS: usize = 4;

/// Number of value slots in a claim.
pub const CLAIM_VALUE_SLOTS: usize = 4;

/// Total number of slots in a claim.
pub const CLAIM_SLOTS: usize = CLAIM_INDEX_SLOTS + CLAIM_VALUE_SLOTS;

/// A single claim slot: a field element as 32 little-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElemBytes([u8; 32]);

impl ElemBytes {
    /// Build a slot from a big integer, checking it is a field element.
    pub fn from_big_int(what: &str, value: &BigUint) -> Result<Self, ValidationError> {
        check_in_field(what, value)?;
        let mut bytes = [0u8; 32];
        let le = value.to_bytes_le();
        bytes[..le.len()].copy_from_slice(&le);
        Ok(Self(bytes))
    }

    /// The slot as a big integer.
    pub fn to_big_int(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }

    /// The raw little-endian bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// An identity claim record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Claim {
    index: [ElemBytes; CLAIM_INDEX_SLOTS],
    value: [ElemBytes; CLAIM_VALUE_SLOTS],
}

impl Claim {
    /// Build a claim from its eight slots (index slots first).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotInField`] naming the first slot that is
    /// not a field element.
    pub fn from_slots(slots: &[BigUint; CLAIM_SLOTS]) -> Result<Self, ValidationError> {
        let mut claim = Claim::default();
        for (i, slot) in slots.iter().enumerate() {
            let elem = ElemBytes::from_big_int(&format!("claim slot {i}"), slot)?;
            if i < CLAIM_INDEX_SLOTS {
                claim.index[i] = elem;
            } else {
                claim.value[i - CLAIM_INDEX_SLOTS] = elem;
            }
        }
        Ok(claim)
    }

    /// Index slots.
    pub fn index(&self) -> &[ElemBytes; CLAIM_INDEX_SLOTS] {
        &self.index
    }

    /// Value slots.
    pub fn value(&self) -> &[ElemBytes; CLAIM_VALUE_SLOTS] {
        &self.value
    }

    /// All eight slots as big integers, index slots first.
    pub fn raw_slots_as_ints(&self) -> Vec<BigUint> {
        self.index
            .iter()
            .chain(self.value.iter())
            .map(ElemBytes::to_big_int)
            .collect()
    }
}

impl Serialize for Claim {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(CLAIM_SLOTS))?;
        for slot in self.raw_slots_as_ints() {
            seq.serialize_element(&slot.to_str_radix(10))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Claim {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        if raw.len() != CLAIM_SLOTS {
            return Err(serde::de::Error::invalid_length(
                raw.len(),
                &"an array of 8 decimal strings",
            ));
        }
        let mut slots: [BigUint; CLAIM_SLOTS] = Default::default();
        for (slot, s) in slots.iter_mut().zip(raw.iter()) {
            *slot = parse_decimal(s).map_err(serde::de::Error::custom)?;
        }
        Claim::from_slots(&slots).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::field_modulus;

    fn slots(values: [u64; 8]) -> [BigUint; CLAIM_SLOTS] {
        values.map(BigUint::from)
    }

    #[test]
    fn slots_preserve_order() {
        let claim = Claim::from_slots(&slots([1, 2, 3, 4, 5, 6, 7, 8])).unwrap();
        let ints = claim.raw_slots_as_ints();
        assert_eq!(ints.len(), 8);
        assert_eq!(ints[0], BigUint::from(1u32));
        assert_eq!(ints[7], BigUint::from(8u32));
        assert_eq!(claim.index()[3].to_big_int(), BigUint::from(4u32));
        assert_eq!(claim.value()[0].to_big_int(), BigUint::from(5u32));
    }

    #[test]
    fn out_of_field_slot_is_named() {
        let mut s = slots([0; 8]);
        s[5] = field_modulus().clone();
        let err = Claim::from_slots(&s).unwrap_err();
        assert!(format!("{err}").contains("claim slot 5"));
    }

    #[test]
    fn json_is_array_of_decimal_strings() {
        let claim = Claim::from_slots(&slots([10, 0, 0, 0, 20, 0, 0, 0])).unwrap();
        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["10", "0", "0", "0", "20", "0", "0", "0"])
        );
    }

    #[test]
    fn json_deserialize_checks_length() {
        let err = serde_json::from_str::<Claim>(r#"["1","2"]"#).unwrap_err();
        assert!(err.to_string().contains("8 decimal strings"));
    }

    #[test]
    fn json_deserialize_roundtrip() {
        let claim = Claim::from_slots(&slots([9, 8, 7, 6, 5, 4, 3, 2])).unwrap();
        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claim);
    }
}
