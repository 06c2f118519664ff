use serde::{Deserialize, Serialize};
use crate::config::enums::completion_policy::CompletionPolicy;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReactorConfig {
    pub poll_timeout_ms: u64,
    pub handshake_timeout_secs: u64,
    pub max_peers: usize,
    pub events_capacity: usize,
    pub read_chunk_size: usize,
    pub max_frame_length: usize,
    pub completion: CompletionPolicy,
}
