use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use crate::udp::structs::peer_descriptor::PeerDescriptor;
use crate::udp::structs::port::Port;

impl PeerDescriptor {
    pub fn new(ip_address: Ipv4Addr, port: u16) -> PeerDescriptor {
        PeerDescriptor { ip_address, port: Port(port) }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip_address, self.port.0))
    }
}

impl From<SocketAddrV4> for PeerDescriptor {
    fn from(addr: SocketAddrV4) -> Self {
        PeerDescriptor::new(*addr.ip(), addr.port())
    }
}

impl fmt::Display for PeerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip_address, self.port.0)
    }
}
