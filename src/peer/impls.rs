pub mod close_reason;
pub mod connection_handle;
pub mod connection_state;
pub mod handshake;
pub mod message_type;
pub mod peer_connection;
pub mod peer_frame;
pub mod peer_transport;
