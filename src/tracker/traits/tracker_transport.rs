use std::io;
use std::net::SocketAddr;
use std::time::Duration;

/// One request/response round trip with a tracker.
///
/// Every call is a single attempt: send `packet` once, wait at most `timeout`
/// for one datagram back. Retrying is the caller's business.
#[cfg_attr(test, mockall::automock)]
pub trait TrackerTransport {
    fn exchange(&mut self, endpoint: SocketAddr, packet: &[u8], timeout: Duration) -> io::Result<Vec<u8>>;
}
