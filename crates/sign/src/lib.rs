//! Digital Signature Primitives
//!
//! ECDSA building blocks over the curves of `ecdhx-algorithms`: the two
//! signature components `r` and `s`, plus prehashed signing and
//! verification assembled from them. The key exchange does not use this
//! crate.

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports
pub use traditional::ecdsa::{
    compute_r, compute_s, hash_to_scalar, sign_prehashed, verify_prehashed, Signature,
};
