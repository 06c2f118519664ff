/// A parsed `udp://host:port[/path]` announce URL.
pub mod announce_url;

/// Metadata taken verbatim from configuration.
pub mod static_metainfo;
