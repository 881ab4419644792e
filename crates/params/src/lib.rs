//! Constant values for the ecdhx library
//!
//! Domain parameters are kept as hexadecimal text so that they can be read
//! side by side with the published standards.

#![no_std]

pub mod traditional;

pub use traditional::ecdh::{lookup_profile, CurveProfile, PRIME256V1, PROFILES};
