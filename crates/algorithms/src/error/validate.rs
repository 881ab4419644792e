//! Validation utilities for curve arithmetic

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::param(
            context,
            format!("expected {} bytes, got {}", expected, actual),
        ));
    }
    Ok(())
}
