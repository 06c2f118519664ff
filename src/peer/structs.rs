/// Stable identifier the reactor registers a connection under.
pub mod connection_handle;

/// The 68-byte handshake frame.
pub mod handshake;

/// Per-peer state machine with its buffers and transport.
pub mod peer_connection;
