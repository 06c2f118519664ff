use std::net::Ipv4Addr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::port::Port;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct AnnounceParams {
    pub downloaded: u64,
    pub uploaded: u64,
    pub event: AnnounceEvent,
    pub ip_address: Option<Ipv4Addr>,
    /// `-1` asks the tracker for its default amount.
    pub num_want: NumberOfPeers,
    pub port: Port,
}
