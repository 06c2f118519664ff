//! Single-threaded readiness reactor for peer connections.
//!
//! One [`mio::Poll`] drives every [`PeerConnection`](crate::peer::structs::peer_connection::PeerConnection).
//! Each iteration recomputes the read and write interest sets, waits once
//! (bounded by the poll timeout), dispatches writable and readable events,
//! enforces the handshake deadline and sweeps closed connections. The loop
//! ends when both interest sets are empty or the [`StopSignal`](structs::stop_signal::StopSignal)
//! fires; every remaining transport is closed on the way out.
//!
//! Events are handled in the order the poller reports them. There is no
//! further fairness between peers.

pub mod impls;
pub mod structs;
