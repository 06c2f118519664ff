//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// It uniquely identifies a torrent across the BitTorrent network. It is
/// handed to this crate already hashed; nothing here computes it.
///
/// # Example
///
/// ```rust
/// use torrust_swarm::tracker::structs::info_hash::InfoHash;
///
/// let hash: InfoHash = "0102030405060708090a0b0c0d0e0f1011121314".parse().unwrap();
/// assert_eq!(hash.0[0], 0x01);
/// ```
///
/// # Serialization
///
/// Serialized as a 40-character hexadecimal string, which is also how it is
/// written in `config.toml`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
