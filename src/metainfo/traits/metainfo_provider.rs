use crate::tracker::structs::info_hash::InfoHash;

/// Supplies torrent metadata to the swarm orchestrator.
pub trait MetainfoProvider {
    /// `(host, port)` of the UDP tracker.
    fn announce_endpoint(&self) -> (String, u16);

    fn total_length(&self) -> u64;

    /// Already hashed; the core never computes it.
    fn info_hash(&self) -> InfoHash;

    fn num_pieces(&self) -> u32;
}
