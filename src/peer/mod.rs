//! Outbound peer connections.
//!
//! A [`PeerConnection`](structs::peer_connection::PeerConnection) owns one
//! transport plus its outbound and inbound byte buffers, and walks
//! `Connecting -> HandshakeStaged -> HandshakeInFlight -> Established`.
//! Any transport error or protocol violation moves it to `Closed` with a
//! [`CloseReason`](enums::close_reason::CloseReason).
//!
//! Nothing here blocks. Writes and reads go as far as the transport allows
//! and report how much moved; the reactor decides when to come back.

pub mod enums;
pub mod impls;
pub mod structs;
pub mod traits;
