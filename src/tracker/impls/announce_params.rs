use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_params::AnnounceParams;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::port::Port;

pub const DEFAULT_LISTEN_PORT: u16 = 6881;

impl Default for AnnounceParams {
    fn default() -> Self {
        AnnounceParams {
            downloaded: 0,
            uploaded: 0,
            event: AnnounceEvent::None,
            ip_address: None,
            num_want: NumberOfPeers(-1),
            port: Port(DEFAULT_LISTEN_PORT),
        }
    }
}
