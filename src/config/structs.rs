//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// `[reactor]` section.
pub mod reactor_config;

/// `[torrent]` section.
pub mod torrent_config;

/// `[tracker]` section.
pub mod tracker_config;
