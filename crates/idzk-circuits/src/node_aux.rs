//! # Non-Membership Auxiliary Encoding
//!
//! A non-membership proof ends either in an empty subtree or at a leaf whose
//! key differs from the queried one. The circuit reads an auxiliary key, an
//! auxiliary value and a "no aux" flag in both cases and branches on the
//! flag, so the empty case still has to supply zero key and value fields.

use serde::{Serialize, Serializer};

use idzk_core::{Hash, NodeAux};

use crate::error::WitnessError;

/// Whether a non-membership proof carries an auxiliary leaf.
///
/// Renders as the circuit's `noAux` flag: `"1"` when absent, `"0"` when
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxPresence {
    /// The path ends in an empty subtree.
    Absent,
    /// Another leaf occupies the queried slot.
    Present,
}

impl AuxPresence {
    /// The `noAux` flag value expected by the circuit.
    pub fn no_aux_flag(self) -> &'static str {
        match self {
            AuxPresence::Absent => "1",
            AuxPresence::Present => "0",
        }
    }
}

impl Serialize for AuxPresence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.no_aux_flag())
    }
}

/// The auxiliary triple of a non-membership proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeAuxValue {
    /// Auxiliary key (`...AuxHi`).
    pub key: Hash,
    /// Auxiliary value (`...AuxHv`).
    pub value: Hash,
    /// Presence flag (`...NoAux`).
    pub presence: AuxPresence,
}

impl NodeAuxValue {
    /// The three fields rendered as the circuit reads them.
    pub fn to_strings(&self) -> (String, String, &'static str) {
        (
            self.key.to_string(),
            self.value.to_string(),
            self.presence.no_aux_flag(),
        )
    }
}

/// Encode an optional auxiliary node.
///
/// `field` names the witness field group in the error.
///
/// # Errors
///
/// Returns [`WitnessError::InconsistentNodeAux`] for a node that is present
/// but lacks its key, its value, or both.
pub fn node_aux_value(
    field: &'static str,
    aux: Option<&NodeAux>,
) -> Result<NodeAuxValue, WitnessError> {
    match aux {
        None => Ok(NodeAuxValue {
            key: Hash::ZERO,
            value: Hash::ZERO,
            presence: AuxPresence::Absent,
        }),
        Some(NodeAux {
            key: Some(key),
            value: Some(value),
        }) => Ok(NodeAuxValue {
            key: *key,
            value: *value,
            presence: AuxPresence::Present,
        }),
        Some(NodeAux {
            key: None,
            value: None,
        }) => Err(WitnessError::InconsistentNodeAux {
            field,
            reason: "node present with neither key nor value",
        }),
        Some(NodeAux { key: None, .. }) => Err(WitnessError::InconsistentNodeAux {
            field,
            reason: "node present without a key",
        }),
        Some(NodeAux { value: None, .. }) => Err(WitnessError::InconsistentNodeAux {
            field,
            reason: "node present without a value",
        }),
    }
}
