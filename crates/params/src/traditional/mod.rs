//! Constants for traditional (elliptic-curve) algorithms

pub mod ecdh;
