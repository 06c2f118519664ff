pub mod announce_url;
pub mod static_metainfo;
