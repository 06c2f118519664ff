use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;
use log::debug;
use socket2::{Domain, Protocol, Socket, Type};
use crate::tracker::structs::udp_transport::UdpTransport;
use crate::tracker::traits::tracker_transport::TrackerTransport;
use crate::udp::udp::MAX_PACKET_SIZE;

impl UdpTransport {
    pub fn new(recv_buffer_size: usize) -> UdpTransport {
        UdpTransport { recv_buffer_size }
    }

    fn open(&self, endpoint: SocketAddr, timeout: Duration) -> io::Result<UdpSocket> {
        let (domain, bind_address) = match endpoint {
            SocketAddr::V4(_) => (Domain::IPV4, SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))),
            SocketAddr::V6(_) => (Domain::IPV6, SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))),
        };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        if self.recv_buffer_size > 0 {
            socket.set_recv_buffer_size(self.recv_buffer_size)?;
        }
        socket.bind(&bind_address.into())?;
        socket.connect(&endpoint.into())?;

        // A zero timeout would mean "block forever" to the std socket.
        let timeout = timeout.max(Duration::from_millis(1));
        let socket: UdpSocket = socket.into();
        socket.set_read_timeout(Some(timeout))?;
        socket.set_write_timeout(Some(timeout))?;
        Ok(socket)
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        UdpTransport::new(65_536)
    }
}

impl TrackerTransport for UdpTransport {
    fn exchange(&mut self, endpoint: SocketAddr, packet: &[u8], timeout: Duration) -> io::Result<Vec<u8>> {
        let socket = self.open(endpoint, timeout)?;
        socket.send(packet)?;

        let mut buffer = vec![0u8; MAX_PACKET_SIZE];
        let received = socket.recv(&mut buffer)?;
        buffer.truncate(received);
        debug!("[UDP] {endpoint} sent {} bytes, received {received} bytes", packet.len());
        Ok(buffer)
    }
}
