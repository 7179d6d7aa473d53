//! # Registry Configuration
//!
//! Selects which built-in circuits the registry loads at startup.
//!
//! The circuit list is determined by:
//! 1. Runtime environment variable (`IDZK_CIRCUITS`, comma-separated ids)
//! 2. Explicit `RegistryConfig` construction
//!
//! An unset or blank variable yields the default list, which holds every
//! built-in circuit.

use serde::{Deserialize, Serialize};

use crate::registry::CircuitId;

/// Environment variable listing the circuits to register.
pub const CIRCUITS_ENV_VAR: &str = "IDZK_CIRCUITS";

/// Startup configuration for [`CircuitRegistry::bootstrap`](crate::CircuitRegistry::bootstrap).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Circuits to register, in registration order.
    pub circuits: Vec<CircuitId>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            circuits: vec![CircuitId::AUTH],
        }
    }
}

impl RegistryConfig {
    /// Build the configuration from the process environment.
    pub fn from_environment() -> Self {
        Self::from_env_value(std::env::var(CIRCUITS_ENV_VAR).ok().as_deref())
    }

    /// Build the configuration from the raw value of [`CIRCUITS_ENV_VAR`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        let circuits: Vec<CircuitId> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| CircuitId::new(s.to_string()))
            .collect();
        if circuits.is_empty() {
            tracing::debug!(var = CIRCUITS_ENV_VAR, "no circuits listed; using default circuit list");
            return Self::default();
        }
        Self { circuits }
    }
}
