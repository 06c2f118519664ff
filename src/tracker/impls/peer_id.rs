use std::fmt;
use std::fmt::Formatter;
use crate::common::common::{bin2hex, generate_peer_id_bytes};
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl PeerId {
    /// A fresh random id behind this client's Azureus-style prefix.
    pub fn generate() -> PeerId {
        PeerId(generate_peer_id_bytes())
    }

    pub fn get_client_name(&self) -> Option<&'static str> {
        if self.0[0] == b'M' {
            return Some("BitTorrent");
        }
        if self.0[0] == b'-' {
            let name = match &self.0[1..3] {
                b"AZ" => "Azureus",
                b"BC" => "BitComet",
                b"DE" => "DelugeTorrent",
                b"KT" => "KTorrent",
                b"LT" => "libtorrent",
                b"lt" => "libTorrent",
                b"PI" => "PicoTorrent",
                b"qB" => "qBittorrent",
                b"TR" => "Transmission",
                b"TS" => "torrust-swarm",
                b"UT" => "µTorrent",
                b"WW" => "WebTorrent",
                _ => return None,
            };
            Some(name)
        } else {
            None
        }
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}
