//! Error handling for curve arithmetic
//!
//! The arithmetic layers share the workspace-wide error taxonomy from
//! `ecdhx-api`; this module adds the validation helpers used at their
//! boundaries.

pub use ecdhx_api::error::{Error, Result};

// Include the validation submodule
pub mod validate;
