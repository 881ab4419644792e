//! Error handling for the ecdhx ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;
