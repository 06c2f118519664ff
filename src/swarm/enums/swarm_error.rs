use std::io;
use thiserror::Error;
use crate::metainfo::enums::metainfo_error::MetainfoError;
use crate::tracker::enums::tracker_error::TrackerError;

#[derive(Error, Debug)]
pub enum SwarmError {
    #[error(transparent)]
    Metainfo(#[from] MetainfoError),

    #[error("Unable to resolve tracker {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error("Reactor failed: {0}")]
    Reactor(#[source] io::Error),
}
