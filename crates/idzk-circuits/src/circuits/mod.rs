//! # Built-in Circuits
//!
//! One module per circuit kind, each providing a [`CircuitDescriptor`], an
//! input bundle implementing [`CircuitMarshaller`](crate::CircuitMarshaller)
//! and an output record implementing
//! [`CircuitUnmarshaller`](crate::CircuitUnmarshaller).
//!
//! [`builtin_descriptor`] is the kind-to-descriptor table used by
//! [`CircuitRegistry::bootstrap`](crate::CircuitRegistry::bootstrap). Adding
//! a kind means adding a module and one table entry.

pub mod auth;

use std::sync::Arc;

use crate::error::RegistryError;
use crate::registry::{CircuitDescriptor, CircuitId};

/// Circuit ids with a built-in descriptor.
pub const BUILTIN_CIRCUITS: &[CircuitId] = &[CircuitId::AUTH];

/// Construct the built-in descriptor for `id`, or `None` if there is none.
pub fn builtin_descriptor(
    id: &CircuitId,
) -> Result<Option<Arc<dyn CircuitDescriptor>>, RegistryError> {
    let descriptor: Arc<dyn CircuitDescriptor> = match id.as_str() {
        "auth" => Arc::new(auth::AuthCircuit::new()?),
        _ => return Ok(None),
    };
    Ok(Some(descriptor))
}
