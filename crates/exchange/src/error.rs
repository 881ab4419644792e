//! Error handling for key exchange sessions

use crate::session::{Role, SessionState};
use ecdhx_api::Error as CoreError;
use thiserror::Error;

/// Result type for session operations
pub type Result<T> = core::result::Result<T, ExchangeError>;

/// A session-fatal failure
///
/// Records which side failed, the state the session was in when it failed,
/// and the underlying cause. The session is unusable afterwards.
#[derive(Debug, Error)]
#[error("{role} session failed in state {state}: {source}")]
pub struct ExchangeError {
    /// Side of the exchange that failed
    pub role: Role,
    /// State at the moment of failure
    pub state: SessionState,
    /// Underlying cause
    #[source]
    pub source: CoreError,
}

impl ExchangeError {
    /// Wrap `source` as a failure of `role` in `state`
    pub fn new(role: Role, state: SessionState, source: CoreError) -> Self {
        ExchangeError {
            role,
            state,
            source,
        }
    }

    /// Category name of the underlying cause
    pub fn category(&self) -> &'static str {
        self.source.category()
    }

    /// Whether the byte channel failed rather than the peer's data
    pub fn is_transport(&self) -> bool {
        self.source.is_transport()
    }
}
