pub mod announce_interval;
pub mod announce_request;
pub mod announce_response;
pub mod connect_request;
pub mod connect_response;
pub mod connection_id;
pub mod error_response;
pub mod malformed_response;
pub mod number_of_bytes;
pub mod number_of_peers;
pub mod peer_descriptor;
pub mod peer_key;
pub mod port;
pub mod transaction_id;
