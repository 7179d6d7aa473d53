//! # Witness Input Bundles
//!
//! Shapes shared by the per-circuit marshalers: a claim together with the
//! proofs that it is issued and not revoked, and the helpers that turn
//! bundle members into witness values. Bundle members are optional because
//! bundles are often assembled or decoded piecemeal by callers; marshaling
//! requires every member and names the first one that is missing.

use serde::{Deserialize, Serialize};

use idzk_core::{check_in_field, BigUint, Claim, MerkleProof, TreeState};

use crate::error::WitnessError;

/// Non-revocation status of a claim: the issuer's tree state and a
/// non-membership proof against its revocation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimNonRevStatus {
    /// Tree state the proof was built against.
    pub tree_state: Option<TreeState>,
    /// Non-membership proof of the claim's revocation nonce.
    pub proof: Option<MerkleProof>,
}

/// A claim with its inclusion and non-revocation proofs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimWithProofs {
    /// The claim record.
    pub claim: Option<Claim>,
    /// Tree state of the identity holding the claim.
    pub tree_state: Option<TreeState>,
    /// Inclusion proof of the claim in the claims tree.
    pub inclusion_proof: Option<MerkleProof>,
    /// Non-revocation status of the claim.
    pub non_rev_status: Option<ClaimNonRevStatus>,
}

/// Borrow a required bundle member.
///
/// # Errors
///
/// Returns [`WitnessError::MissingInput`] naming `field` when absent.
pub fn require<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, WitnessError> {
    value.as_ref().ok_or(WitnessError::MissingInput { field })
}

/// Render a numeric input as a decimal field element.
///
/// # Errors
///
/// Returns [`WitnessError::OutOfField`] naming `field` when `value` is not
/// a field element.
pub fn field_element(field: &'static str, value: &BigUint) -> Result<String, WitnessError> {
    check_in_field(field, value).map_err(|source| WitnessError::OutOfField { field, source })?;
    Ok(value.to_str_radix(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use idzk_core::field_modulus;

    #[test]
    fn require_names_missing_field() {
        let absent: Option<u8> = None;
        let err = require(&absent, "authClaim.claim").unwrap_err();
        assert!(matches!(err, WitnessError::MissingInput { field: "authClaim.claim" }));
        assert_eq!(*require(&Some(5u8), "x").unwrap(), 5);
    }

    #[test]
    fn field_element_renders_decimal() {
        assert_eq!(field_element("challenge", &BigUint::from(12345u32)).unwrap(), "12345");
    }

    #[test]
    fn field_element_rejects_modulus() {
        let err = field_element("challenge", field_modulus()).unwrap_err();
        assert!(matches!(err, WitnessError::OutOfField { field: "challenge", .. }));
    }

    #[test]
    fn bundle_json_uses_camel_case() {
        let bundle: ClaimWithProofs = serde_json::from_str(
            r#"{"claim":null,"treeState":null,"inclusionProof":{"existence":true,"siblings":["1"]},"nonRevStatus":null}"#,
        )
        .unwrap();
        assert_eq!(bundle.inclusion_proof.unwrap().siblings.len(), 1);
    }
}
