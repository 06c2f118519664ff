/// Optional announce fields (byte counters, event, port, ...).
pub mod announce_params;

/// 20-byte torrent identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Retry exhaustion details.
pub mod retry_error;

/// Attempt cap and backoff schedule.
pub mod retry_policy;

/// The client itself.
pub mod tracker_client;

/// Identity values carried in every request.
pub mod tracker_session;

/// Socket-backed transport, one fresh socket per attempt.
pub mod udp_transport;
