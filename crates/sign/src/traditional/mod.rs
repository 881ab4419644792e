//! Traditional signature schemes

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{compute_r, compute_s, Signature};
