use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// `pstrlen=19 | "BitTorrent protocol" | reserved[8] | info_hash[20] | peer_id[20]`
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Handshake {
    pub reserved: [u8; 8],
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
}
