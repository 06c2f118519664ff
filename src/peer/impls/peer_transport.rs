use std::io;
use std::net::Shutdown;
use mio::net::TcpStream;
use crate::peer::traits::peer_transport::PeerTransport;

impl PeerTransport for TcpStream {
    /// A non-blocking connect has finished once the socket reports no pending
    /// error and knows its peer address.
    fn poll_connected(&mut self) -> io::Result<bool> {
        if let Some(error) = self.take_error()? {
            return Err(error);
        }
        match self.peer_addr() {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn shutdown(&mut self) -> io::Result<()> {
        TcpStream::shutdown(self, Shutdown::Both)
    }
}
