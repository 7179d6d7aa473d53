//! # Marshaling Traits
//!
//! The two halves of the prover bridge. A [`CircuitMarshaller`] turns a
//! typed input bundle into the circuit's witness object; a
//! [`CircuitUnmarshaller`] turns the prover's public-signal array back into
//! a typed record. Both are implemented once per circuit kind.

use serde_json::{Map, Value};

use crate::error::{CircuitError, DecodeError, WitnessError};
use crate::registry::{CircuitId, CircuitRegistry};
use crate::schema::PublicSignalSchema;
use crate::signals::{parse_signal_array, PublicSignals};

/// A witness object: circuit input name to JSON value.
pub type WitnessInputs = Map<String, Value>;

/// Per-circuit witness assembly.
pub trait CircuitMarshaller {
    /// The circuit kind this bundle is an input for.
    const CIRCUIT_ID: CircuitId;

    /// Assemble the witness object.
    ///
    /// # Errors
    ///
    /// Fails if any required input is missing or does not fit the
    /// circuit's fixed shape.
    fn circuit_inputs(&self) -> Result<WitnessInputs, WitnessError>;

    /// Assemble the witness and serialize it as JSON bytes.
    fn circuit_marshal(&self) -> Result<Vec<u8>, WitnessError> {
        let inputs = self.circuit_inputs()?;
        Ok(serde_json::to_vec(&inputs)?)
    }
}

/// Per-circuit public-signal decoding.
pub trait CircuitUnmarshaller: Sized {
    /// The circuit kind whose outputs this type decodes.
    const CIRCUIT_ID: CircuitId;

    /// Build the typed record from arity-checked signals.
    fn from_public_signals(signals: &PublicSignals<'_>) -> Result<Self, DecodeError>;

    /// Decode `values` against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ArityMismatch`] or
    /// [`DecodeError::MalformedSignal`]; there is no partial result.
    fn from_signal_values(values: &[String], schema: &PublicSignalSchema) -> Result<Self, DecodeError> {
        let signals = PublicSignals::new(schema, values)?;
        let decoded = Self::from_public_signals(&signals)?;
        tracing::debug!(circuit = %Self::CIRCUIT_ID, signals = values.len(), "decoded public signals");
        Ok(decoded)
    }

    /// Decode a JSON array of decimal strings against `schema`.
    fn circuit_unmarshal(data: &[u8], schema: &PublicSignalSchema) -> Result<Self, DecodeError> {
        let values = parse_signal_array(data)?;
        Self::from_signal_values(&values, schema)
    }
}

/// Decode public signals using the schema registered for `T`'s circuit.
///
/// # Errors
///
/// Fails with a registry error if the circuit is not registered, or with a
/// decode error if the signals do not match its schema.
pub fn unmarshal_outputs<T: CircuitUnmarshaller>(
    registry: &CircuitRegistry,
    data: &[u8],
) -> Result<T, CircuitError> {
    let descriptor = registry.lookup(&T::CIRCUIT_ID)?;
    Ok(T::circuit_unmarshal(data, descriptor.public_signals_schema())?)
}
