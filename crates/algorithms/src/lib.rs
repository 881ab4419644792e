//! Elliptic-curve arithmetic for the ecdhx library
//!
//! This crate provides the numeric core of ecdhx: modular arithmetic over a
//! prime modulus, short-Weierstrass curve parameters, the affine group law,
//! double-and-add scalar multiplication, and the key types built on top of
//! them.
//!
//! # Limitations
//!
//! The arithmetic is written for clarity on arbitrary-precision integers. It
//! is *not* constant-time: running time depends on the bit length of the
//! scalar and on the values being processed.

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{
    CurveParameters, KeyPair, Point, PrimeField, PrivateKey, PublicKey, SharedSecret,
};
