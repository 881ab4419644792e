//! Trait definitions shared across ecdhx crates

pub mod transport;

pub use transport::Transport;
