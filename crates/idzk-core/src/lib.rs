#![deny(missing_docs)]

//! # idzk-core — Identity Protocol Primitives
//!
//! The value types that flow into and out of identity circuits. It has no
//! internal crate dependencies; everything above it (the witness encoders,
//! the circuit registry, the per-circuit marshalers) depends on it.
//!
//! ## Design Principles
//!
//! 1. **Valid by construction.** [`Hash`], [`Id`] and [`Claim`] check field
//!    bounds, lengths and checksums in their constructors. A witness built
//!    from them never carries an out-of-field value.
//!
//! 2. **Decimal at the edges.** Field elements render as base-10 strings,
//!    the representation the prover reads. Byte layouts are little-endian.
//!
//! 3. **Opaque collaborators.** Merkle proofs, tree states and signatures
//!    are plain data shapes. Computing them is the job of the tree and
//!    signature libraries.

pub mod claim;
pub mod error;
pub mod field;
pub mod hash;
pub mod identity;
pub mod merkle;
pub mod signature;

// Re-export primary types at crate root for ergonomic imports.
pub use claim::{Claim, ElemBytes, CLAIM_SLOTS};
pub use error::ValidationError;
pub use field::{check_in_field, field_modulus, in_field, parse_decimal, FIELD_MODULUS_DECIMAL};
pub use hash::Hash;
pub use identity::{Id, ID_LEN};
pub use merkle::{MerkleProof, NodeAux, TreeState};
pub use signature::{Point, Signature};

// Big-integer type used across the public API.
pub use num_bigint::BigUint;
