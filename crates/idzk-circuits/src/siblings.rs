//! # Sibling-Path Encoding
//!
//! Circuits verify Merkle paths of a fixed depth. A real proof from a
//! sparse tree is usually shorter, so the path is extended with zero hashes
//! up to the circuit's `levels` before rendering each entry as a decimal
//! string. A path longer than `levels` cannot be represented and is
//! rejected.

use idzk_core::Hash;

use crate::error::WitnessError;

/// Pad `siblings` with [`Hash::ZERO`] to exactly `levels` entries.
///
/// `field` names the witness field in the error.
///
/// # Errors
///
/// Returns [`WitnessError::SiblingsExceedDepth`] when `siblings` is longer
/// than `levels`.
pub fn prepare_siblings(
    field: &'static str,
    siblings: &[Hash],
    levels: usize,
) -> Result<Vec<Hash>, WitnessError> {
    if siblings.len() > levels {
        return Err(WitnessError::SiblingsExceedDepth {
            field,
            levels,
            actual: siblings.len(),
        });
    }
    let mut padded = Vec::with_capacity(levels);
    padded.extend_from_slice(siblings);
    padded.resize(levels, Hash::ZERO);
    Ok(padded)
}

/// Pad `siblings` to `levels` entries and render each as a decimal string.
pub fn prepare_siblings_str(
    field: &'static str,
    siblings: &[Hash],
    levels: usize,
) -> Result<Vec<String>, WitnessError> {
    Ok(prepare_siblings(field, siblings, levels)?
        .iter()
        .map(Hash::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use idzk_core::BigUint;

    fn h(n: u64) -> Hash {
        Hash::from_big_int(&BigUint::from(n)).unwrap()
    }

    #[test]
    fn empty_path_is_all_zeros() {
        let out = prepare_siblings_str("mtp", &[], 4).unwrap();
        assert_eq!(out, vec!["0", "0", "0", "0"]);
    }

    #[test]
    fn short_path_is_padded_after_originals() {
        let out = prepare_siblings_str("mtp", &[h(11), h(22)], 5).unwrap();
        assert_eq!(out, vec!["11", "22", "0", "0", "0"]);
    }

    #[test]
    fn full_path_is_unchanged() {
        let out = prepare_siblings_str("mtp", &[h(1), h(2), h(3)], 3).unwrap();
        assert_eq!(out, vec!["1", "2", "3"]);
    }

    #[test]
    fn zero_levels_accepts_only_empty_path() {
        assert!(prepare_siblings_str("mtp", &[], 0).unwrap().is_empty());
        assert!(prepare_siblings_str("mtp", &[h(1)], 0).is_err());
    }

    #[test]
    fn overlong_path_is_rejected() {
        let err = prepare_siblings("userAuthClaimMtp", &[h(1), h(2), h(3)], 2).unwrap_err();
        match err {
            WitnessError::SiblingsExceedDepth {
                field,
                levels,
                actual,
            } => {
                assert_eq!(field, "userAuthClaimMtp");
                assert_eq!(levels, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use idzk_core::BigUint;
    use proptest::prelude::*;

    fn hash_strategy() -> impl Strategy<Value = Hash> {
        any::<u64>().prop_map(|n| Hash::from_big_int(&BigUint::from(n)).unwrap())
    }

    proptest! {
        /// Paths that fit are padded to exactly `levels`, originals first.
        #[test]
        fn fitting_path_is_padded(
            siblings in prop::collection::vec(hash_strategy(), 0..16),
            extra in 0usize..16,
        ) {
            let levels = siblings.len() + extra;
            let out = prepare_siblings_str("mtp", &siblings, levels).unwrap();
            prop_assert_eq!(out.len(), levels);
            for (rendered, original) in out.iter().zip(siblings.iter()) {
                prop_assert_eq!(rendered, &original.to_string());
            }
            for rendered in &out[siblings.len()..] {
                prop_assert_eq!(rendered.as_str(), "0");
            }
        }

        /// Paths longer than `levels` always fail.
        #[test]
        fn overlong_path_fails(
            siblings in prop::collection::vec(hash_strategy(), 1..16),
            shortfall in 1usize..16,
        ) {
            let levels = siblings.len().saturating_sub(shortfall);
            let is_shape_error = matches!(
                prepare_siblings_str("mtp", &siblings, levels),
                Err(WitnessError::SiblingsExceedDepth { .. })
            );
            prop_assert!(is_shape_error);
        }

        /// Encoding is a pure function of its inputs.
        #[test]
        fn encoding_is_deterministic(
            siblings in prop::collection::vec(hash_strategy(), 0..8),
        ) {
            let a = prepare_siblings_str("mtp", &siblings, 8).unwrap();
            let b = prepare_siblings_str("mtp", &siblings, 8).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
