pub mod announce_event;
pub mod announce_params;
pub mod backoff;
pub mod info_hash;
pub mod peer_id;
pub mod retry_policy;
pub mod tracker_client;
pub mod tracker_error;
pub mod tracker_session;
pub mod tracker_state;
pub mod udp_transport;
