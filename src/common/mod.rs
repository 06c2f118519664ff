//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Hex encoding/decoding for 20-byte identifiers
//! - Random identifier generation (transaction ids, keys, peer ids)

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
