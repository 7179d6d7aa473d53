//! # Circuit Error Types
//!
//! Structured errors for building witnesses, managing the circuit registry
//! and decoding public signals. Nothing here is retried or downgraded to a
//! default: a witness that cannot be built exactly is not built at all.

use thiserror::Error;

use idzk_core::ValidationError;

use crate::registry::CircuitId;

/// Errors while assembling witness inputs.
#[derive(Error, Debug)]
pub enum WitnessError {
    /// A Merkle path is longer than the circuit's fixed depth.
    #[error("{field}: sibling path of length {actual} exceeds circuit depth {levels}")]
    SiblingsExceedDepth {
        /// Witness field the path was destined for.
        field: &'static str,
        /// The circuit's fixed depth.
        levels: usize,
        /// Length of the supplied path.
        actual: usize,
    },

    /// An auxiliary node is neither absent nor fully populated.
    #[error("{field}: inconsistent auxiliary node: {reason}")]
    InconsistentNodeAux {
        /// Witness field group the node was destined for.
        field: &'static str,
        /// What is wrong with the node.
        reason: &'static str,
    },

    /// A required part of the input bundle is absent.
    #[error("missing required input: {field}")]
    MissingInput {
        /// Path of the absent value within the input bundle.
        field: &'static str,
    },

    /// A numeric input is not an element of the circuit's field.
    #[error("{field}: {source}")]
    OutOfField {
        /// Witness field the value was destined for.
        field: &'static str,
        /// The underlying range check failure.
        #[source]
        source: ValidationError,
    },

    /// JSON serialization of the assembled witness failed.
    #[error("witness serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the circuit registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No descriptor is registered under the requested circuit.
    #[error("circuit not registered: {0}")]
    NotRegistered(CircuitId),

    /// A descriptor is already registered under this circuit.
    #[error("circuit already registered: {0}")]
    DuplicateCircuit(CircuitId),

    /// A descriptor was offered under an id other than its own.
    #[error("descriptor for circuit {actual} cannot be registered as {expected}")]
    MismatchedCircuit {
        /// Id the descriptor was offered under.
        expected: CircuitId,
        /// Id the descriptor reports.
        actual: CircuitId,
    },

    /// Configuration named a circuit with no built-in descriptor.
    #[error("no built-in descriptor for circuit: {0}")]
    UnknownBuiltin(CircuitId),

    /// A public-signal schema document is malformed.
    #[error("invalid public signal schema: {0}")]
    InvalidSchema(String),
}

/// Errors while decoding a circuit's public signals.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The number of signals differs from the schema's arity.
    #[error("invalid number of output values: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Arity declared by the schema.
        expected: usize,
        /// Number of signals supplied.
        actual: usize,
    },

    /// A signal could not be parsed as its declared type.
    #[error("malformed signal {name} at position {position}: \"{value}\" ({reason})")]
    MalformedSignal {
        /// Position in the signal array.
        position: usize,
        /// Schema name of the signal.
        name: String,
        /// The raw signal string.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The output type reads a signal the schema does not declare.
    #[error("signal not declared in schema: {0}")]
    UnknownSignal(String),

    /// The signal document is not a JSON array of strings.
    #[error("invalid public signal document: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Top-level error for the circuits crate.
#[derive(Error, Debug)]
pub enum CircuitError {
    /// Witness assembly failure.
    #[error("witness error: {0}")]
    Witness(#[from] WitnessError),

    /// Registry failure.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Public-signal decode failure.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
