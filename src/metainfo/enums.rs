pub mod metainfo_error;
