use serde::{Deserialize, Serialize};
use crate::config::enums::backoff_kind::BackoffKind;
use crate::tracker::enums::announce_event::AnnounceEvent;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub request_timeout_ms: u64,
    pub max_attempts: u32,
    pub backoff: BackoffKind,
    pub backoff_base_ms: u64,
    pub backoff_max_ms: u64,
    pub connection_ttl_secs: u64,
    pub num_want: i32,
    pub listen_port: u16,
    pub event: AnnounceEvent,
    pub recv_buffer_size: usize,
}
