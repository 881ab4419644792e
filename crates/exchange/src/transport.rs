//! Message transports
//!
//! [`FramedTransport`] turns any byte stream into a message channel by
//! prefixing each message with its length as a big-endian `u32`.
//! [`TcpTransport`] is that framing over a socket with read/write deadlines,
//! and [`ChannelTransport`] connects two endpoints inside one process.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use ecdhx_api::Transport;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Default upper bound on a single frame
pub const DEFAULT_MAX_FRAME_LEN: usize = 4096;

/// Length-prefixed framing over a byte stream
#[derive(Debug)]
pub struct FramedTransport<S> {
    stream: S,
    max_frame_len: usize,
}

impl<S: Read + Write> FramedTransport<S> {
    /// Wrap `stream`, refusing frames longer than `max_frame_len`
    pub fn new(stream: S, max_frame_len: usize) -> Self {
        FramedTransport {
            stream,
            max_frame_len,
        }
    }

    /// The wrapped stream
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write> Transport for FramedTransport<S> {
    fn send(&mut self, message: &[u8]) -> io::Result<()> {
        if message.len() > self.max_frame_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "frame of {} bytes exceeds limit of {}",
                    message.len(),
                    self.max_frame_len
                ),
            ));
        }
        let len = u32::try_from(message.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "frame length exceeds u32")
        })?;
        self.stream.write_u32::<BigEndian>(len)?;
        self.stream.write_all(message)?;
        self.stream.flush()
    }

    fn receive(&mut self) -> io::Result<Vec<u8>> {
        let len = self.stream.read_u32::<BigEndian>()? as usize;
        if len > self.max_frame_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "peer announced {} byte frame, limit is {}",
                    len, self.max_frame_len
                ),
            ));
        }
        let mut body = vec![0u8; len];
        self.stream.read_exact(&mut body)?;
        Ok(body)
    }
}

/// Framed TCP connection with optional per-operation deadlines
#[derive(Debug)]
pub struct TcpTransport {
    inner: FramedTransport<TcpStream>,
    peer: SocketAddr,
}

impl TcpTransport {
    /// Connect to `addr`
    ///
    /// `timeout` bounds the connect attempt and every later read and write;
    /// `None` waits indefinitely.
    pub fn connect<A: ToSocketAddrs>(
        addr: A,
        timeout: Option<Duration>,
        max_frame_len: usize,
    ) -> io::Result<Self> {
        let mut last_err = None;
        for candidate in addr.to_socket_addrs()? {
            let attempt = match timeout {
                Some(limit) => TcpStream::connect_timeout(&candidate, limit),
                None => TcpStream::connect(candidate),
            };
            match attempt {
                Ok(stream) => return Self::from_stream(stream, timeout, max_frame_len),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "address resolved to nothing")
        }))
    }

    /// Wrap an accepted connection
    pub fn from_stream(
        stream: TcpStream,
        timeout: Option<Duration>,
        max_frame_len: usize,
    ) -> io::Result<Self> {
        stream.set_read_timeout(timeout)?;
        stream.set_write_timeout(timeout)?;
        stream.set_nodelay(true)?;
        let peer = stream.peer_addr()?;
        Ok(TcpTransport {
            inner: FramedTransport::new(stream, max_frame_len),
            peer,
        })
    }

    /// Remote address of the connection
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, message: &[u8]) -> io::Result<()> {
        self.inner.send(message)
    }

    fn receive(&mut self) -> io::Result<Vec<u8>> {
        self.inner.receive()
    }
}

/// In-process message channel
#[derive(Debug)]
pub struct ChannelTransport {
    tx: Sender<Vec<u8>>,
    rx: Receiver<Vec<u8>>,
    timeout: Option<Duration>,
}

impl ChannelTransport {
    /// Two connected endpoints
    pub fn pair() -> (Self, Self) {
        let (a_tx, b_rx) = mpsc::channel();
        let (b_tx, a_rx) = mpsc::channel();
        (
            ChannelTransport {
                tx: a_tx,
                rx: a_rx,
                timeout: None,
            },
            ChannelTransport {
                tx: b_tx,
                rx: b_rx,
                timeout: None,
            },
        )
    }

    /// Fail `receive` with `TimedOut` after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Transport for ChannelTransport {
    fn send(&mut self, message: &[u8]) -> io::Result<()> {
        self.tx
            .send(message.to_vec())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "peer endpoint dropped"))
    }

    fn receive(&mut self) -> io::Result<Vec<u8>> {
        match self.timeout {
            None => self
                .rx
                .recv()
                .map_err(|_| io::Error::new(io::ErrorKind::UnexpectedEof, "peer endpoint dropped")),
            Some(limit) => self.rx.recv_timeout(limit).map_err(|e| match e {
                mpsc::RecvTimeoutError::Timeout => {
                    io::Error::new(io::ErrorKind::TimedOut, "no message before deadline")
                }
                mpsc::RecvTimeoutError::Disconnected => {
                    io::Error::new(io::ErrorKind::UnexpectedEof, "peer endpoint dropped")
                }
            }),
        }
    }
}
