/// Why a connection ended up `Closed`.
pub mod close_reason;

/// Lifecycle of a single peer connection.
pub mod connection_state;

/// Standard peer-wire message ids, used for logging.
pub mod message_type;

/// A complete frame cut from the inbound buffer after the handshake.
pub mod peer_frame;
