use std::io;
use thiserror::Error;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum CloseReason {
    #[error("Connect failed ({kind:?}): {message}")]
    ConnectFailed {
        kind: io::ErrorKind,
        message: String,
    },

    #[error("Transport error ({kind:?}): {message}")]
    Transport {
        kind: io::ErrorKind,
        message: String,
    },

    #[error("Peer closed the connection")]
    PeerHungUp,

    #[error("Handshake for {received}, expected {expected}")]
    ProtocolMismatch {
        expected: InfoHash,
        received: InfoHash,
    },

    #[error("Invalid handshake: {0}")]
    InvalidHandshake(String),

    #[error("Frame of {length} bytes exceeds the limit")]
    FrameTooLarge {
        length: usize,
    },

    #[error("Handshake not completed in time")]
    HandshakeTimeout,

    #[error("Reactor shut down")]
    Shutdown,

    #[error("Cancelled")]
    Cancelled,
}
