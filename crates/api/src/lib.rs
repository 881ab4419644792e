//! Public API traits and types for the ecdhx library
//!
//! This crate provides the public API surface shared by every ecdhx crate:
//! the error taxonomy used across curve arithmetic, key exchange and
//! signatures, and the [`Transport`] contract the key exchange runs over.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::Transport;
