//! UDP tracker client.
//!
//! The client owns a [`TrackerSession`](structs::tracker_session::TrackerSession)
//! (connection id, transaction id, peer id, key) and drives it through
//! `Idle -> Connecting -> Connected -> Announcing -> Announced`. Any failed
//! validation parks the client in `Failed`; a new session generation has to be
//! started with `reset()` before it can be used again.
//!
//! # Main Components
//!
//! - `TrackerClient` - connect/announce exchanges with validation
//! - `TrackerSession` - identity values carried in every request
//! - `RetryPolicy` - bounded retry with a backoff schedule
//! - `TrackerTransport` - one request/response round trip, `UdpTransport` for real sockets
//! - `InfoHash` / `PeerId` - 20-byte identifiers

/// Enumerations for client state, errors, backoff and announce events.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for the client and its session.
pub mod structs;

/// Transport seam used by the client.
pub mod traits;
