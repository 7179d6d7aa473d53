//! # idzk-circuits — Identity Circuit Witness Bridge
//!
//! Encodes identity-protocol values into the witness objects consumed by an
//! external zero-knowledge prover, and decodes the prover's public signals
//! back into typed values.
//!
//! ## Architecture
//!
//! - [`siblings`] pads Merkle paths to a circuit's fixed depth.
//! - [`node_aux`] encodes the auxiliary leaf of non-membership proofs.
//! - [`registry`] maps circuit ids to [`CircuitDescriptor`]s exposing each
//!   circuit's verification key and [`PublicSignalSchema`].
//! - [`marshal`] defines the per-circuit [`CircuitMarshaller`] and
//!   [`CircuitUnmarshaller`] contracts, implemented in [`circuits`].
//!
//! Every numeric witness value is rendered as a base-10 string. Marshaling
//! and unmarshaling are pure: either the whole witness (or output record)
//! is produced, or an error names the offending field or position.
//!
//! ## Example
//!
//! ```rust,no_run
//! use idzk_circuits::{unmarshal_outputs, AuthOutputs, CircuitRegistry, RegistryConfig};
//!
//! let registry = CircuitRegistry::bootstrap(&RegistryConfig::from_environment())?;
//! let outputs: AuthOutputs = unmarshal_outputs(&registry, br#"["1","2","3"]"#)?;
//! println!("authenticated {}", outputs.user_id);
//! # Ok::<(), idzk_circuits::CircuitError>(())
//! ```

pub mod circuits;
pub mod config;
pub mod error;
pub mod inputs;
pub mod marshal;
pub mod node_aux;
pub mod registry;
pub mod schema;
pub mod siblings;
pub mod signals;

// Re-export primary types.
pub use circuits::auth::{AuthCircuit, AuthInputs, AuthOutputs, AUTHENTICATION_LEVELS};
pub use config::RegistryConfig;
pub use error::{CircuitError, DecodeError, RegistryError, WitnessError};
pub use inputs::{ClaimNonRevStatus, ClaimWithProofs};
pub use marshal::{unmarshal_outputs, CircuitMarshaller, CircuitUnmarshaller, WitnessInputs};
pub use node_aux::{node_aux_value, AuxPresence, NodeAuxValue};
pub use registry::{CircuitDescriptor, CircuitId, CircuitRegistry, VerificationKey};
pub use schema::PublicSignalSchema;
pub use siblings::{prepare_siblings, prepare_siblings_str};
pub use signals::PublicSignals;
