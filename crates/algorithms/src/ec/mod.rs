//! Elliptic Curve Primitives
//!
//! Short-Weierstrass curves y² = x³ + a·x + b over a prime field 𝔽ₚ.
//! The only named profile is NIST P-256 (`prime256v1`), but every operation
//! takes its [`CurveParameters`] explicitly so the same code runs on small
//! textbook curves in tests.
//!
//! Layout:
//! - [`field`]: modular add/sub/mul/inverse over a prime modulus
//! - [`curve`]: immutable domain parameters (a, b, p, G, n)
//! - [`point`]: affine points with an explicit identity variant
//! - `arithmetic`: point addition, doubling and negation
//! - `scalar_mul`: binary double-and-add k·P
//! - [`keys`]: private/public keys and the ECDH shared secret

pub mod curve;
pub mod field;
pub mod keys;
pub mod point;

mod arithmetic;
mod scalar_mul;

pub use curve::CurveParameters;
pub use field::PrimeField;
pub use keys::{KeyPair, PrivateKey, PublicKey, SharedSecret};
pub use point::Point;
