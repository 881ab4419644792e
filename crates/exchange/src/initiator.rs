//! Initiator role
//!
//! The initiator opens the connection, sends its public key and then waits
//! for the responder's.

use crate::config::ExchangeConfig;
use crate::error::{ExchangeError, Result};
use crate::session::{ExchangeSummary, Role, Session, SessionState};
use crate::transport::TcpTransport;
use ecdhx_algorithms::ec::CurveParameters;
use ecdhx_api::{ResultExt, Transport};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// Run one initiator session over an established transport
pub fn initiate<T, R>(
    curve: Arc<CurveParameters>,
    transport: &mut T,
    rng: &mut R,
) -> Result<ExchangeSummary>
where
    T: Transport + ?Sized,
    R: CryptoRng + RngCore,
{
    Session::new(curve, Role::Initiator).run(transport, rng)
}

/// TCP client side of the exchange
pub struct Initiator;

impl Initiator {
    /// Dial `config.address` and run one exchange with OS randomness
    pub fn connect(config: &ExchangeConfig) -> Result<ExchangeSummary> {
        Self::connect_with_rng(config, &mut OsRng)
    }

    /// Dial `config.address` and run one exchange with `rng`
    pub fn connect_with_rng<R: CryptoRng + RngCore>(
        config: &ExchangeConfig,
        rng: &mut R,
    ) -> Result<ExchangeSummary> {
        let setup = |e| ExchangeError::new(Role::Initiator, SessionState::Idle, e);

        config.validate().map_err(setup)?;
        let curve = config.curve_parameters().map_err(setup)?;
        let mut transport = TcpTransport::connect(
            config.address.as_str(),
            config.io_timeout(),
            config.max_frame_len,
        )
        .transport_context("connect to responder")
        .map_err(setup)?;

        initiate(Arc::new(curve), &mut transport, rng)
    }
}
