//! Integration test support for the ecdhx library
//!
//! `vectors` runs known-answer ECDH vectors from JSON files; `harness`
//! starts responders on loopback for the network tests.

pub mod vectors;
