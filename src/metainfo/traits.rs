pub mod metainfo_provider;
