//! # ecdhx
//!
//! Elliptic-curve Diffie-Hellman over NIST P-256 between two peers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecdhx = "0.3"
//! ```
//!
//! ## Features
//!
//! - `exchange` (default): sessions, transports and the initiator/responder roles
//! - `sign` (default): ECDSA signature components over the same curves
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecdhx-api`]: Error taxonomy and the transport contract
//! - [`ecdhx-params`]: Named curve domain parameters
//! - [`ecdhx-algorithms`]: Field and curve arithmetic, keys
//! - [`ecdhx-exchange`]: The key exchange protocol
//! - [`ecdhx-sign`]: ECDSA primitives

// Core re-exports (always available)
pub use ecdhx_algorithms as algorithms;
pub use ecdhx_api as api;
pub use ecdhx_params as params;

// Randomness for key generation and signing
pub use rand;

// Feature-gated re-exports
#[cfg(feature = "exchange")]
pub use ecdhx_exchange as exchange;

#[cfg(feature = "sign")]
pub use ecdhx_sign as sign;

/// Common imports for ecdhx users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result, Transport};

    // Randomness
    pub use crate::rand::{CryptoRng, RngCore};

    // Curve engine
    pub use crate::algorithms::{
        CurveParameters, KeyPair, Point, PrimeField, PrivateKey, PublicKey, SharedSecret,
    };

    #[cfg(feature = "exchange")]
    pub use crate::exchange::{
        initiate, ExchangeConfig, ExchangeError, ExchangeSummary, Initiator, Responder, Role,
        Session, SessionOutcome, SessionState, TcpTransport,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{compute_r, compute_s, Signature};
}
