use crate::config::structs::torrent_config::TorrentConfig;
use crate::metainfo::enums::metainfo_error::MetainfoError;
use crate::metainfo::structs::announce_url::AnnounceUrl;
use crate::metainfo::structs::static_metainfo::StaticMetainfo;
use crate::metainfo::traits::metainfo_provider::MetainfoProvider;
use crate::tracker::structs::info_hash::InfoHash;

impl StaticMetainfo {
    pub fn new(announce: AnnounceUrl, total_length: u64, info_hash: InfoHash, num_pieces: u32) -> StaticMetainfo {
        StaticMetainfo {
            announce,
            total_length,
            info_hash,
            num_pieces,
        }
    }

    pub fn from_config(config: &TorrentConfig) -> Result<StaticMetainfo, MetainfoError> {
        Ok(StaticMetainfo::new(
            AnnounceUrl::parse(&config.announce)?,
            config.total_length,
            config.info_hash,
            config.num_pieces,
        ))
    }
}

impl MetainfoProvider for StaticMetainfo {
    fn announce_endpoint(&self) -> (String, u16) {
        (self.announce.host.clone(), self.announce.port)
    }

    fn total_length(&self) -> u64 {
        self.total_length
    }

    fn info_hash(&self) -> InfoHash {
        self.info_hash
    }

    fn num_pieces(&self) -> u32 {
        self.num_pieces
    }
}
