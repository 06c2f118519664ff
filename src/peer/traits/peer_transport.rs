use std::io;
use std::io::{Read, Write};

/// A non-blocking byte stream to one peer.
///
/// `read` and `write` follow the usual non-blocking contract: `WouldBlock`
/// means "come back later", never failure.
pub trait PeerTransport: Read + Write {
    /// `Ok(true)` once a pending connect has completed, `Ok(false)` while it
    /// is still in progress, `Err` when it failed.
    fn poll_connected(&mut self) -> io::Result<bool>;

    fn shutdown(&mut self) -> io::Result<()>;
}
