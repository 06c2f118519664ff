//! # Torrust-Swarm
//!
//! Finds peers for a torrent through a UDP tracker and opens BitTorrent peer
//! wire connections to them.
//!
//! ## Overview
//!
//! A run has two phases. First a [`TrackerClient`](tracker::structs::tracker_client::TrackerClient)
//! performs the BEP 15 connect and announce exchange, retrying lost datagrams
//! with a configurable backoff. Then a single-threaded
//! [`ConnectionReactor`](reactor::structs::connection_reactor::ConnectionReactor)
//! opens non-blocking TCP connections to the returned peers, sends the 68-byte
//! handshake, validates the reply and cuts length-prefixed frames, all
//! multiplexed on one `mio` poller.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification (handshake and framing)
//! - BEP 15: UDP Tracker Protocol (connect and announce)
//! - BEP 23: Tracker Returns Compact Peer Lists
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torrust_swarm::config::structs::configuration::Configuration;
//! use torrust_swarm::metainfo::structs::static_metainfo::StaticMetainfo;
//! use torrust_swarm::reactor::structs::stop_signal::StopSignal;
//! use torrust_swarm::swarm::swarm::run_swarm;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let metainfo = StaticMetainfo::from_config(&config.torrent)?;
//! let report = run_swarm(&config, &metainfo, StopSignal::new())?;
//! println!("{report}");
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Hex helpers, identifier generation and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`metainfo`] - Torrent metadata supplied to the core
//! - [`peer`] - Per-peer connection state machine, handshake and framing
//! - [`reactor`] - Readiness-driven event loop over all peer connections
//! - [`structs`] - CLI argument parsing
//! - [`swarm`] - Discovery followed by handshaking, end to end
//! - [`tracker`] - UDP tracker client, session and retry handling
//! - [`udp`] - UDP tracker wire format (BEP 15)

/// Common utilities and shared functionality.
///
/// Contains hex conversion, random identifier generation and the fern
/// logging setup used by the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Torrent metadata provider.
pub mod metainfo;

/// Peer wire connections.
///
/// One [`PeerConnection`](peer::structs::peer_connection::PeerConnection) per
/// remote peer, moving from connecting through the handshake to established
/// or closed, with its own outbound and inbound buffers.
pub mod peer;

/// Single-threaded connection reactor built on `mio`.
pub mod reactor;

/// CLI argument parsing.
pub mod structs;

/// Orchestration of a full discovery and handshake run.
pub mod swarm;

/// UDP tracker client.
///
/// Session identifiers, retry policy, the transport seam and the client
/// state machine driving connect and announce.
pub mod tracker;

/// UDP tracker protocol wire format (BEP 15).
///
/// Encodes connect and announce requests and decodes connect, announce and
/// error responses.
pub mod udp;
