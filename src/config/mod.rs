//! Configuration management module.
//!
//! Loads `config.toml` into a [`Configuration`](structs::configuration::Configuration)
//! and validates it before anything touches the network.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **tracker**: per-attempt timeout, retry cap, backoff schedule, announce fields
//! - **reactor**: poll timeout, handshake deadline, peer cap, framing limits
//! - **torrent**: announce URL, info hash, total length and piece count
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_swarm::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when missing
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! Configuration::save_file("config.toml", toml::to_string(&default_config)?)?;
//! ```

/// Configuration enumerations (backoff kind, completion policy, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
