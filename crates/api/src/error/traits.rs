//! Error handling traits for the ecdhx ecosystem

use super::types::{Error, Result};
use std::io;

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Convert an I/O failure into [`Error::Transport`] tagged with `context`
    fn transport_context(self, context: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for core::result::Result<T, io::Error> {
    fn transport_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::transport(context, e))
    }
}
