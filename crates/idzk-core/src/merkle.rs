//! # Merkle Proofs and Tree State
//!
//! Data shapes handed over by the sparse Merkle tree library. Building
//! proofs and hashing nodes happens elsewhere; here a proof is the ordered
//! list of sibling hashes from leaf to root, plus the auxiliary node that a
//! non-membership proof carries when another leaf occupies the queried slot.

use serde::{Deserialize, Serialize};

use crate::hash::Hash;

/// Auxiliary leaf of a non-membership proof.
///
/// Mirrors the tree library's wire shape, where both halves are optional.
/// A well-formed node has either both halves or is absent altogether; a
/// half-populated node is rejected when the witness is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeAux {
    /// Key (index hash) of the leaf occupying the slot.
    pub key: Option<Hash>,
    /// Value hash of that leaf.
    pub value: Option<Hash>,
}

impl NodeAux {
    /// A fully populated auxiliary node.
    pub fn new(key: Hash, value: Hash) -> Self {
        Self {
            key: Some(key),
            value: Some(value),
        }
    }
}

/// A Merkle inclusion or non-inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleProof {
    /// Whether the proof shows membership (`true`) or absence (`false`).
    pub existence: bool,
    /// Sibling hashes ordered from the leaf towards the root.
    pub siblings: Vec<Hash>,
    /// Auxiliary node for non-membership proofs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_aux: Option<NodeAux>,
}

impl MerkleProof {
    /// An inclusion proof with the given siblings.
    pub fn inclusion(siblings: Vec<Hash>) -> Self {
        Self {
            existence: true,
            siblings,
            node_aux: None,
        }
    }

    /// A non-membership proof ending in an empty subtree.
    pub fn non_membership(siblings: Vec<Hash>) -> Self {
        Self {
            existence: false,
            siblings,
            node_aux: None,
        }
    }

    /// A non-membership proof where another leaf occupies the slot.
    pub fn non_membership_with_aux(siblings: Vec<Hash>, aux: NodeAux) -> Self {
        Self {
            existence: false,
            siblings,
            node_aux: Some(aux),
        }
    }

    /// All siblings from leaf to root.
    pub fn all_siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Number of siblings in the path.
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }
}

/// Snapshot of an identity's Merkle roots and the derived state hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeState {
    /// Aggregate identity state hash.
    pub state: Hash,
    /// Root of the claims tree.
    pub claims_root: Hash,
    /// Root of the revocation tree.
    pub revocation_root: Hash,
    /// Root of the roots-of-roots tree.
    pub root_of_roots: Hash,
}
