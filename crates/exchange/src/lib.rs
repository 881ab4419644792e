//! ECDH Key Exchange
//!
//! This crate runs the two-party exchange on top of `ecdhx-algorithms`:
//! the JSON wire format for points, length-framed transports, the
//! single-use session state machine, and the initiator and responder roles.

pub mod config;
pub mod error;
pub mod initiator;
pub mod responder;
pub mod session;
pub mod transport;
pub mod wire;

// Re-exports
pub use config::{ExchangeConfig, KeyPolicy};
pub use error::ExchangeError;
pub use initiator::{initiate, Initiator};
pub use responder::{handle_session, Responder, SessionOutcome};
pub use session::{ExchangeSummary, Role, Session, SessionState};
pub use transport::{ChannelTransport, FramedTransport, TcpTransport};
