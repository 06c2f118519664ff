use serde::{Deserialize, Serialize};
use crate::config::structs::reactor_config::ReactorConfig;
use crate::config::structs::torrent_config::TorrentConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub tracker: TrackerConfig,
    pub reactor: ReactorConfig,
    pub torrent: TorrentConfig,
}
