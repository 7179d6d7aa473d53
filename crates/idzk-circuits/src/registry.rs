//! # Circuit Descriptors and Registry
//!
//! Each circuit kind publishes a [`CircuitDescriptor`]: its verification
//! key, handed unmodified to the external verifier, and its public-signal
//! schema. The [`CircuitRegistry`] maps circuit ids to descriptors.
//!
//! ## Lifecycle
//!
//! A registry is built once during startup (see [`CircuitRegistry::bootstrap`])
//! and then shared by reference, typically behind an `Arc`. Registration
//! takes `&mut self` and lookups take `&self`, so once the registry is
//! shared it is read-only and concurrent lookups need no locking.
//! Registering a circuit id twice is an error: the first descriptor stays.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::circuits::builtin_descriptor;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::schema::PublicSignalSchema;

/// Stable identifier of a circuit kind.
///
/// The set is open: any string is a valid id, and the built-in kinds are
/// available as associated constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitId(Cow<'static, str>);

impl CircuitId {
    /// Basic authentication circuit.
    pub const AUTH: CircuitId = CircuitId(Cow::Borrowed("auth"));

    /// Create an id from any string.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A circuit's verification key document.
///
/// Opaque to this crate: stored and returned exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey(Cow<'static, str>);

impl VerificationKey {
    /// Wrap a verification key document.
    pub fn new(json: impl Into<Cow<'static, str>>) -> Self {
        Self(json.into())
    }

    /// The document as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The document as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Static metadata of one circuit kind.
///
/// Implementations hold immutable state fixed at construction; both
/// accessors are pure.
pub trait CircuitDescriptor: fmt::Debug + Send + Sync {
    /// The circuit kind this descriptor belongs to.
    fn circuit_id(&self) -> CircuitId;

    /// The verification key for proofs of this circuit.
    fn verification_key(&self) -> &VerificationKey;

    /// The ordered public-signal schema.
    fn public_signals_schema(&self) -> &PublicSignalSchema;
}

/// Mapping from circuit id to descriptor.
#[derive(Debug, Default, Clone)]
pub struct CircuitRegistry {
    circuits: BTreeMap<CircuitId, Arc<dyn CircuitDescriptor>>,
}

impl CircuitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding the built-in descriptors named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownBuiltin`] for an id without a
    /// built-in descriptor and [`RegistryError::DuplicateCircuit`] when an
    /// id is listed twice.
    pub fn bootstrap(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for id in &config.circuits {
            let descriptor =
                builtin_descriptor(id)?.ok_or_else(|| RegistryError::UnknownBuiltin(id.clone()))?;
            registry.register(id.clone(), descriptor)?;
        }
        tracing::info!(circuits = registry.len(), "circuit registry bootstrapped");
        Ok(registry)
    }

    /// Register `descriptor` under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MismatchedCircuit`] if `descriptor` reports
    /// a different circuit id, and [`RegistryError::DuplicateCircuit`] if
    /// `id` is already registered; the existing descriptor is kept.
    pub fn register(
        &mut self,
        id: CircuitId,
        descriptor: Arc<dyn CircuitDescriptor>,
    ) -> Result<(), RegistryError> {
        let actual = descriptor.circuit_id();
        if actual != id {
            tracing::warn!(
                circuit = %id,
                descriptor = %actual,
                "rejected mismatched circuit registration"
            );
            return Err(RegistryError::MismatchedCircuit {
                expected: id,
                actual,
            });
        }
        if self.circuits.contains_key(&id) {
            tracing::warn!(circuit = %id, "rejected duplicate circuit registration");
            return Err(RegistryError::DuplicateCircuit(id));
        }
        tracing::info!(
            circuit = %id,
            public_signals = descriptor.public_signals_schema().arity(),
            "registered circuit"
        );
        self.circuits.insert(id, descriptor);
        Ok(())
    }

    /// Look up the descriptor registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if nothing is registered
    /// under `id`.
    pub fn lookup(&self, id: &CircuitId) -> Result<&Arc<dyn CircuitDescriptor>, RegistryError> {
        self.circuits
            .get(id)
            .ok_or_else(|| RegistryError::NotRegistered(id.clone()))
    }

    /// Whether a descriptor is registered under `id`.
    pub fn contains(&self, id: &CircuitId) -> bool {
        self.circuits.contains_key(id)
    }

    /// Registered circuit ids in sorted order.
    pub fn circuit_ids(&self) -> impl Iterator<Item = &CircuitId> {
        self.circuits.keys()
    }

    /// Number of registered circuits.
    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubCircuit {
        id: CircuitId,
        vk: VerificationKey,
        schema: PublicSignalSchema,
    }

    impl StubCircuit {
        fn new(id: &'static str, vk: &'static str) -> Arc<dyn CircuitDescriptor> {
            Arc::new(Self {
                id: CircuitId::new(id),
                vk: VerificationKey::new(vk),
                schema: PublicSignalSchema::from_pairs([("out", 0)]).unwrap(),
            })
        }
    }

    impl CircuitDescriptor for StubCircuit {
        fn circuit_id(&self) -> CircuitId {
            self.id.clone()
        }
        fn verification_key(&self) -> &VerificationKey {
            &self.vk
        }
        fn public_signals_schema(&self) -> &PublicSignalSchema {
            &self.schema
        }
    }

    #[test]
    fn register_then_lookup() {
        let mut registry = CircuitRegistry::new();
        registry
            .register(CircuitId::new("stub"), StubCircuit::new("stub", "{\"k\":1}"))
            .unwrap();
        let d = registry.lookup(&CircuitId::new("stub")).unwrap();
        assert_eq!(d.verification_key().as_str(), "{\"k\":1}");
        assert_eq!(d.public_signals_schema().arity(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut registry = CircuitRegistry::new();
        let id = CircuitId::new("stub");
        registry.register(id.clone(), StubCircuit::new("stub", "first")).unwrap();
        let err = registry
            .register(id.clone(), StubCircuit::new("stub", "second"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCircuit(ref dup) if *dup == id));
        assert_eq!(registry.lookup(&id).unwrap().verification_key().as_str(), "first");
    }

    #[test]
    fn descriptor_must_match_registration_id() {
        let mut registry = CircuitRegistry::new();
        let err = registry
            .register(CircuitId::AUTH, StubCircuit::new("kyc", "KYC-VK"))
            .unwrap_err();
        match err {
            RegistryError::MismatchedCircuit { expected, actual } => {
                assert_eq!(expected, CircuitId::AUTH);
                assert_eq!(actual, CircuitId::new("kyc"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(registry.is_empty());
        assert!(matches!(
            registry.lookup(&CircuitId::AUTH),
            Err(RegistryError::NotRegistered(_))
        ));
    }

    #[test]
    fn unregistered_lookup_fails() {
        let registry = CircuitRegistry::new();
        assert!(registry.is_empty());
        let err = registry.lookup(&CircuitId::AUTH).unwrap_err();
        assert!(matches!(err, RegistryError::NotRegistered(ref id) if *id == CircuitId::AUTH));
    }

    #[test]
    fn circuit_id_serializes_as_string() {
        assert_eq!(serde_json::to_value(CircuitId::AUTH).unwrap(), "auth");
        let id: CircuitId = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(id.as_str(), "custom");
        assert_eq!(id.to_string(), "custom");
    }

    #[test]
    fn bootstrap_default_config_registers_auth() {
        let registry = CircuitRegistry::bootstrap(&RegistryConfig::default()).unwrap();
        assert!(registry.contains(&CircuitId::AUTH));
        let ids: Vec<_> = registry.circuit_ids().cloned().collect();
        assert_eq!(ids, vec![CircuitId::AUTH]);
    }

    #[test]
    fn bootstrap_rejects_unknown_builtin() {
        let config = RegistryConfig {
            circuits: vec![CircuitId::new("unknown")],
        };
        assert!(matches!(
            CircuitRegistry::bootstrap(&config),
            Err(RegistryError::UnknownBuiltin(_))
        ));
    }

    #[test]
    fn bootstrap_rejects_repeated_id() {
        let config = RegistryConfig {
            circuits: vec![CircuitId::AUTH, CircuitId::AUTH],
        };
        assert!(matches!(
            CircuitRegistry::bootstrap(&config),
            Err(RegistryError::DuplicateCircuit(_))
        ));
    }
}
