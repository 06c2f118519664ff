use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TorrentConfig {
    /// `udp://host:port[/path]`
    pub announce: String,
    pub info_hash: InfoHash,
    pub total_length: u64,
    pub num_pieces: u32,
}
