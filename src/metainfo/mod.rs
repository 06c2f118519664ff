//! Torrent metadata as the core needs it.
//!
//! The core never parses torrent files. It asks a [`MetainfoProvider`](traits::metainfo_provider::MetainfoProvider)
//! once for the announce endpoint, total length, info hash and piece count
//! and treats the answers as immutable. [`StaticMetainfo`](structs::static_metainfo::StaticMetainfo)
//! builds them from the `[torrent]` section of the configuration.

pub mod enums;
pub mod impls;
pub mod structs;
pub mod traits;
