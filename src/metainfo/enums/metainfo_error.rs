use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum MetainfoError {
    #[error("Unsupported announce URL scheme in \"{0}\", expected udp://")]
    UnsupportedScheme(String),

    #[error("Announce URL \"{0}\" has no host")]
    MissingHost(String),

    #[error("Announce URL \"{0}\" has no valid port")]
    InvalidPort(String),
}
