//! Trait definition for the message channel a key exchange runs over

use std::io;

/// A bidirectional, reliable, ordered message channel.
///
/// Each call to [`receive`](Transport::receive) yields exactly one complete
/// logical message. Framing (length prefixes, delimiters) is the
/// implementation's responsibility; the key exchange only sees whole
/// messages.
pub trait Transport {
    /// Send one complete message to the peer
    fn send(&mut self, message: &[u8]) -> io::Result<()>;

    /// Block until the peer's next complete message is available
    fn receive(&mut self) -> io::Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, message: &[u8]) -> io::Result<()> {
        (**self).send(message)
    }

    fn receive(&mut self) -> io::Result<Vec<u8>> {
        (**self).receive()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, message: &[u8]) -> io::Result<()> {
        (**self).send(message)
    }

    fn receive(&mut self) -> io::Result<Vec<u8>> {
        (**self).receive()
    }
}
