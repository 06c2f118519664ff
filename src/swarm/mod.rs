//! Ties discovery and handshaking together: resolve the tracker, connect,
//! announce once, then drive handshakes with the returned peers until the
//! reactor runs out of work or is stopped.

pub mod enums;
pub mod swarm;
