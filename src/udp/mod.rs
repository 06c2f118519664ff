//! UDP tracker protocol codec (BEP 15), client side.
//!
//! # Protocol Overview
//!
//! The UDP tracker protocol uses a connection-oriented approach:
//! 1. Client sends a connect request carrying the protocol identifier
//! 2. Tracker responds with a connection ID
//! 3. Client uses the connection ID for its announce request
//!
//! # Message Types
//!
//! - **Connect** (action=0): Obtain a connection ID
//! - **Announce** (action=1): Register with the swarm, get a peer list
//! - **Error** (action=3): Tracker-side failure with a text message
//!
//! Everything in this module is pure: packets are built from values and
//! parsed from byte slices, no sockets are touched here.

/// Enumerations for packet kinds.
pub mod enums;

/// Implementation blocks for packet encoding and decoding.
pub mod impls;

/// Data structures for UDP protocol messages.
pub mod structs;

/// Codec entry points and protocol constants.
#[allow(clippy::module_inception)]
pub mod udp;

/// Unit tests for the codec.
pub mod tests;
