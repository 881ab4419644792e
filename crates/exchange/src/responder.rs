//! Responder role and accept loop
//!
//! Each accepted connection runs on its own thread. Workers share the curve
//! and, under [`KeyPolicy::Static`], one key pair; nothing is mutated after
//! startup. A failing session is reported through the outcome channel and
//! never stops the listener.

use crate::config::{ExchangeConfig, KeyPolicy};
use crate::error::{ExchangeError, Result as SessionResult};
use crate::session::{ExchangeSummary, Role, Session, SessionState};
use crate::transport::TcpTransport;
use ecdhx_algorithms::ec::{CurveParameters, KeyPair};
use ecdhx_algorithms::error::{Error, Result};
use ecdhx_api::{ResultExt, Transport};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// What happened to one accepted connection
#[derive(Debug)]
pub struct SessionOutcome {
    /// Sequence number of the accepted connection, starting at 1
    pub id: u64,
    /// Remote address, when the connection got far enough to have one
    pub peer: Option<SocketAddr>,
    /// Summary of the exchange or the reason it failed
    pub result: SessionResult<ExchangeSummary>,
}

/// Run one responder session over an established transport
///
/// With `static_key` the session starts in `KeyGenerated` using that pair;
/// otherwise it samples a fresh ephemeral pair from `rng`.
pub fn handle_session<T, R>(
    curve: Arc<CurveParameters>,
    transport: &mut T,
    static_key: Option<&KeyPair>,
    rng: &mut R,
) -> SessionResult<ExchangeSummary>
where
    T: Transport + ?Sized,
    R: CryptoRng + RngCore,
{
    let mut session = match static_key {
        Some(pair) => Session::with_key_pair(curve, Role::Responder, pair.clone()),
        None => Session::new(curve, Role::Responder),
    };
    session.run(transport, rng)
}

/// TCP server side of the exchange
#[derive(Debug)]
pub struct Responder {
    listener: TcpListener,
    curve: Arc<CurveParameters>,
    static_key: Option<Arc<KeyPair>>,
    config: ExchangeConfig,
}

impl Responder {
    /// Bind to `config.address`
    ///
    /// Under [`KeyPolicy::Static`] the shared key pair is generated here.
    pub fn bind(config: ExchangeConfig) -> Result<Self> {
        config.validate()?;
        let curve = Arc::new(config.curve_parameters()?);
        let static_key = match config.key_policy {
            KeyPolicy::Static => Some(Arc::new(KeyPair::generate(&curve, &mut OsRng)?)),
            KeyPolicy::Ephemeral => None,
        };
        let listener =
            TcpListener::bind(config.address.as_str()).transport_context("bind listener")?;
        Ok(Responder {
            listener,
            curve,
            static_key,
            config,
        })
    }

    /// Address actually bound, useful with port 0
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .transport_context("listener address")
    }

    /// Shared curve parameters
    pub fn curve(&self) -> &Arc<CurveParameters> {
        &self.curve
    }

    /// The reused key pair under [`KeyPolicy::Static`]
    pub fn static_key(&self) -> Option<&KeyPair> {
        self.static_key.as_deref()
    }

    /// Accept connections and run one worker thread per connection
    ///
    /// Every connection produces exactly one [`SessionOutcome`] on
    /// `outcomes`. With `limit` the loop stops after that many connections
    /// and returns once their workers finish; without it the loop runs
    /// until the listener itself fails.
    pub fn serve(&self, outcomes: Sender<SessionOutcome>, limit: Option<usize>) -> Result<()> {
        let mut workers: Vec<JoinHandle<()>> = Vec::new();
        let mut accepted: u64 = 0;

        for incoming in self.listener.incoming() {
            accepted += 1;
            let id = accepted;

            match incoming {
                Ok(stream) => {
                    let curve = Arc::clone(&self.curve);
                    let static_key = self.static_key.clone();
                    let timeout = self.config.io_timeout();
                    let max_frame_len = self.config.max_frame_len;
                    let worker_outcomes = outcomes.clone();

                    let mut builder =
                        thread::Builder::new().name(format!("ecdhx-session-{}", id));
                    if let Some(size) = self.config.worker_stack_size {
                        builder = builder.stack_size(size);
                    }
                    let spawned = builder.spawn(move || {
                        let peer = stream.peer_addr().ok();
                        let result = TcpTransport::from_stream(stream, timeout, max_frame_len)
                            .transport_context("configure connection")
                            .map_err(|e| {
                                ExchangeError::new(Role::Responder, SessionState::Idle, e)
                            })
                            .and_then(|mut transport| {
                                handle_session(
                                    curve,
                                    &mut transport,
                                    static_key.as_deref(),
                                    &mut OsRng,
                                )
                            });
                        let _ = worker_outcomes.send(SessionOutcome { id, peer, result });
                    });

                    match spawned {
                        Ok(handle) => workers.push(handle),
                        Err(e) => {
                            let _ = outcomes.send(SessionOutcome {
                                id,
                                peer: None,
                                result: Err(ExchangeError::new(
                                    Role::Responder,
                                    SessionState::Idle,
                                    Error::transport("spawn session worker", e),
                                )),
                            });
                        }
                    }
                }
                Err(e) => {
                    let _ = outcomes.send(SessionOutcome {
                        id,
                        peer: None,
                        result: Err(ExchangeError::new(
                            Role::Responder,
                            SessionState::Idle,
                            Error::transport("accept connection", e),
                        )),
                    });
                }
            }

            workers.retain(|handle| !handle.is_finished());
            if limit.map_or(false, |max| accepted as usize >= max) {
                break;
            }
        }

        for handle in workers {
            // a panicking worker has already lost its session
            let _ = handle.join();
        }
        Ok(())
    }
}
