use crate::metainfo::structs::announce_url::AnnounceUrl;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct StaticMetainfo {
    pub announce: AnnounceUrl,
    pub total_length: u64,
    pub info_hash: InfoHash,
    pub num_pieces: u32,
}
