//! # Challenge Signatures
//!
//! A Baby Jubjub EdDSA signature as it enters the authentication witness:
//! the `R8` curve point and the `S` scalar. Signing and verification live in
//! the signature library; this type only carries the three integers.

use num_bigint::BigUint;

/// An affine curve point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: BigUint,
    /// Y coordinate.
    pub y: BigUint,
}

/// An EdDSA signature over a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The `R8` commitment point.
    pub r8: Point,
    /// The `S` scalar.
    pub s: BigUint,
}

impl Signature {
    /// Assemble a signature from its three components.
    pub fn new(r8_x: BigUint, r8_y: BigUint, s: BigUint) -> Self {
        Self {
            r8: Point { x: r8_x, y: r8_y },
            s,
        }
    }
}
