//! Single-use key exchange session
//!
//! A session walks `Idle → KeyGenerated → LocalPublicSent →
//! PeerPublicReceived → SecretComputed`. Any failure, including a call made
//! in the wrong state, moves it to `Aborted`, drops the private key and
//! returns an [`ExchangeError`]. There is no way back to `Idle`; a new
//! exchange needs a new session.

use crate::error::{ExchangeError, Result};
use crate::wire;
use ecdhx_algorithms::ec::{CurveParameters, KeyPair, PrivateKey, PublicKey, SharedSecret};
use ecdhx_algorithms::error::{Error, Result as CoreResult};
use ecdhx_api::{ResultExt, Transport};
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::sync::Arc;

/// Side of the exchange
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Dials the peer and sends first
    Initiator,
    /// Accepts the connection and replies after receiving
    Responder,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Initiator => f.write_str("initiator"),
            Role::Responder => f.write_str("responder"),
        }
    }
}

/// Protocol state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Nothing generated yet
    Idle,
    /// Local key pair available
    KeyGenerated,
    /// Local public key handed to the transport
    LocalPublicSent,
    /// Peer public key decoded and validated
    PeerPublicReceived,
    /// Shared secret derived; terminal
    SecretComputed,
    /// Failed; terminal
    Aborted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "Idle",
            SessionState::KeyGenerated => "KeyGenerated",
            SessionState::LocalPublicSent => "LocalPublicSent",
            SessionState::PeerPublicReceived => "PeerPublicReceived",
            SessionState::SecretComputed => "SecretComputed",
            SessionState::Aborted => "Aborted",
        };
        f.write_str(name)
    }
}

/// Result of a completed exchange
#[derive(Clone, Debug)]
pub struct ExchangeSummary {
    /// Side that produced this summary
    pub role: Role,
    /// Our public key
    pub public_key: PublicKey,
    /// The peer's public key
    pub peer_public_key: PublicKey,
    /// private · peer_public
    pub shared_secret: SharedSecret,
}

/// One exchange between two peers
pub struct Session {
    curve: Arc<CurveParameters>,
    role: Role,
    state: SessionState,
    private: Option<PrivateKey>,
    public: Option<PublicKey>,
    peer: Option<PublicKey>,
    secret: Option<SharedSecret>,
}

impl Session {
    /// New session in `Idle`
    pub fn new(curve: Arc<CurveParameters>, role: Role) -> Self {
        Session {
            curve,
            role,
            state: SessionState::Idle,
            private: None,
            public: None,
            peer: None,
            secret: None,
        }
    }

    /// New session that starts in `KeyGenerated` with an existing key pair
    pub fn with_key_pair(curve: Arc<CurveParameters>, role: Role, key_pair: KeyPair) -> Self {
        let KeyPair { private, public } = key_pair;
        Session {
            private: Some(private),
            public: Some(public),
            state: SessionState::KeyGenerated,
            ..Session::new(curve, role)
        }
    }

    /// Side of the exchange
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Curve the session runs on
    pub fn curve(&self) -> &Arc<CurveParameters> {
        &self.curve
    }

    /// Our public key, once generated
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public.as_ref()
    }

    /// The peer's public key, once received
    pub fn peer_public_key(&self) -> Option<&PublicKey> {
        self.peer.as_ref()
    }

    /// The shared secret, once computed
    pub fn shared_secret(&self) -> Option<&SharedSecret> {
        self.secret.as_ref()
    }

    /// Whether the private key is still held
    pub fn holds_private_key(&self) -> bool {
        self.private.is_some()
    }

    /// `Idle → KeyGenerated`: sample a private key and derive its public point
    pub fn generate_key<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
    ) -> Result<&PublicKey> {
        self.expect_state(SessionState::Idle, "Session::generate_key")?;
        let KeyPair { private, public } = match KeyPair::generate(&self.curve, rng) {
            Ok(pair) => pair,
            Err(e) => return Err(self.abort(e)),
        };
        self.private = Some(private);
        self.state = SessionState::KeyGenerated;
        Ok(self.public.insert(public))
    }

    /// `KeyGenerated → LocalPublicSent`: serialize our public key and send it
    pub fn send_public<T: Transport + ?Sized>(
        &mut self,
        transport: &mut T,
    ) -> Result<()> {
        self.expect_state(SessionState::KeyGenerated, "Session::send_public")?;
        let sent = self.encode_public().and_then(|message| {
            transport
                .send(&message)
                .transport_context("send public key")
        });
        match sent {
            Ok(()) => {
                self.state = SessionState::LocalPublicSent;
                Ok(())
            }
            Err(e) => Err(self.abort(e)),
        }
    }

    /// `LocalPublicSent → PeerPublicReceived`: wait for the peer's message
    pub fn receive_peer<T: Transport + ?Sized>(
        &mut self,
        transport: &mut T,
    ) -> Result<&PublicKey> {
        self.expect_state(SessionState::LocalPublicSent, "Session::receive_peer")?;
        match transport.receive().transport_context("receive peer public key") {
            Ok(message) => self.accept_peer(&message),
            Err(e) => Err(self.abort(e)),
        }
    }

    /// `LocalPublicSent → PeerPublicReceived` for a message already read
    ///
    /// The peer point must decode, lie on the curve and not be the identity.
    pub fn accept_peer(
        &mut self,
        message: &[u8],
    ) -> Result<&PublicKey> {
        self.expect_state(SessionState::LocalPublicSent, "Session::accept_peer")?;
        let decoded = wire::decode_point(&self.curve, message)
            .and_then(|point| PublicKey::from_point(&self.curve, point));
        match decoded {
            Ok(peer) => {
                self.state = SessionState::PeerPublicReceived;
                Ok(self.peer.insert(peer))
            }
            Err(e) => Err(self.abort(e)),
        }
    }

    /// `PeerPublicReceived → SecretComputed`: derive the shared point
    ///
    /// The private key is dropped (and zeroized) on success.
    pub fn compute_secret(&mut self) -> Result<&SharedSecret> {
        self.expect_state(SessionState::PeerPublicReceived, "Session::compute_secret")?;
        let derived = match (&self.private, &self.peer) {
            (Some(private), Some(peer)) => SharedSecret::derive(&self.curve, private, peer),
            _ => Err(Error::state(
                "Session::compute_secret",
                "key material missing",
            )),
        };
        match derived {
            Ok(secret) => {
                self.private = None;
                self.state = SessionState::SecretComputed;
                Ok(self.secret.insert(secret))
            }
            Err(e) => Err(self.abort(e)),
        }
    }

    /// Drive the whole exchange over `transport`
    ///
    /// The initiator sends first and then reads. The responder reads the
    /// peer's message first, sends its own, and only then processes what it
    /// read, so both sides pass through the same states.
    pub fn run<T, R>(
        &mut self,
        transport: &mut T,
        rng: &mut R,
    ) -> Result<ExchangeSummary>
    where
        T: Transport + ?Sized,
        R: CryptoRng + RngCore,
    {
        if self.state == SessionState::Idle {
            self.generate_key(rng)?;
        }

        match self.role {
            Role::Initiator => {
                self.send_public(transport)?;
                self.receive_peer(transport)?;
            }
            Role::Responder => {
                self.expect_state(SessionState::KeyGenerated, "Session::run")?;
                let message = match transport.receive().transport_context("receive peer public key")
                {
                    Ok(message) => message,
                    Err(e) => return Err(self.abort(e)),
                };
                self.send_public(transport)?;
                self.accept_peer(&message)?;
            }
        }

        self.compute_secret()?;
        self.summary()
    }

    /// Snapshot of a completed exchange
    pub fn summary(&self) -> Result<ExchangeSummary> {
        match (&self.public, &self.peer, &self.secret) {
            (Some(public), Some(peer), Some(secret)) if self.state == SessionState::SecretComputed => {
                Ok(ExchangeSummary {
                    role: self.role,
                    public_key: public.clone(),
                    peer_public_key: peer.clone(),
                    shared_secret: secret.clone(),
                })
            }
            _ => Err(ExchangeError::new(
                self.role,
                self.state,
                Error::state("Session::summary", "exchange has not completed"),
            )),
        }
    }

    fn encode_public(&self) -> CoreResult<Vec<u8>> {
        match &self.public {
            Some(public) => wire::encode_point(public.point()),
            None => Err(Error::state("Session::send_public", "no public key")),
        }
    }

    fn expect_state(
        &mut self,
        expected: SessionState,
        context: &'static str,
    ) -> Result<()> {
        if self.state == expected {
            return Ok(());
        }
        let message = format!("expected {}, session is {}", expected, self.state);
        Err(self.abort(Error::state(context, message)))
    }

    fn abort(&mut self, source: Error) -> ExchangeError {
        let err = ExchangeError::new(self.role, self.state, source);
        self.private = None;
        self.state = SessionState::Aborted;
        err
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("curve", &self.curve.name())
            .field("role", &self.role)
            .field("state", &self.state)
            .field("public", &self.public)
            .field("peer", &self.peer)
            .finish_non_exhaustive()
    }
}
