//! Error type definitions for curve arithmetic and key exchange

use std::io;
use thiserror::Error;

/// Primary error type for ecdhx operations
///
/// Arithmetic and point operations never recover internally; every failure
/// is surfaced through this type and propagated to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Unrecognised curve profile name
    #[error("unsupported curve profile '{name}'")]
    Configuration {
        name: String,
    },

    /// Entropy source unavailable or unusable
    #[error("randomness failure in {context}: {message}")]
    Randomness {
        context: &'static str,
        message: String,
    },

    /// Modular inverse undefined (denominator ≡ 0 mod p or mod n)
    #[error("no modular inverse in {context}")]
    NoInverse { context: &'static str },

    /// Invalid parameter (malformed curve parameters, out-of-range scalar, ...)
    #[error("invalid parameter in {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Coordinates do not satisfy the curve equation
    #[error("point is not on curve {curve}")]
    PointNotOnCurve {
        curve: String,
    },

    /// A value could not be encoded for the wire
    #[error("serialization error in {context}: {message}")]
    Serialization {
        context: &'static str,
        message: String,
    },

    /// A wire payload could not be decoded
    #[error("deserialization error in {context}: {message}")]
    Deserialization {
        context: &'static str,
        message: String,
    },

    /// Connection failure, timeout or partial read
    #[error("transport error in {context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    /// Signature component r collapsed to zero; the nonce must be resampled
    #[error("signature component r is zero")]
    DegenerateR,

    /// Signature failed verification or has out-of-range components
    #[error("invalid signature in {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Operation attempted in the wrong protocol state
    #[error("invalid state in {context}: {message}")]
    InvalidState {
        context: &'static str,
        message: String,
    },
}

/// Result type for ecdhx operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Deserialization error
    pub fn deserialization(context: &'static str, message: impl Into<String>) -> Self {
        Error::Deserialization {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Serialization error
    pub fn serialization(context: &'static str, message: impl Into<String>) -> Self {
        Error::Serialization {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Transport error from an I/O failure
    pub fn transport(context: &'static str, source: io::Error) -> Self {
        Error::Transport { context, source }
    }

    /// Shorthand to create an InvalidSignature error
    pub fn signature(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidSignature {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an InvalidState error
    pub fn state(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidState {
            context,
            message: message.into(),
        }
    }

    /// Stable category name for operator-facing reports
    pub fn category(&self) -> &'static str {
        match self {
            Error::Configuration { .. } => "ConfigurationError",
            Error::Randomness { .. } => "RandomnessError",
            Error::NoInverse { .. } => "NoInverseError",
            Error::InvalidParameter { .. } => "InvalidParameterError",
            Error::PointNotOnCurve { .. } => "DeserializationError",
            Error::Serialization { .. } => "SerializationError",
            Error::Deserialization { .. } => "DeserializationError",
            Error::Transport { .. } => "TransportError",
            Error::DegenerateR => "DegenerateRError",
            Error::InvalidSignature { .. } => "InvalidSignatureError",
            Error::InvalidState { .. } => "InvalidStateError",
        }
    }

    /// Whether the failure came from the byte channel rather than the peer's data
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}
