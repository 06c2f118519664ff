use std::net::Ipv4Addr;
use crate::udp::structs::port::Port;

/// One compact IPv4 peer entry from an announce response.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerDescriptor {
    pub ip_address: Ipv4Addr,
    pub port: Port,
}
