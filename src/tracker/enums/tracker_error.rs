use std::io;
use thiserror::Error;
use crate::tracker::enums::tracker_state::TrackerState;
use crate::udp::structs::malformed_response::MalformedResponse;
use crate::udp::structs::transaction_id::TransactionId;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("Protocol mismatch on {field}: expected {expected}, received {received}")]
    ProtocolMismatch {
        field: &'static str,
        expected: i64,
        received: i64,
    },

    #[error("Tracker returned an error: {message}")]
    ErrorPacket {
        transaction_id: TransactionId,
        message: String,
    },

    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),

    #[error("Tracker unreachable after {attempts} attempts: {last_error}")]
    Unreachable {
        attempts: u32,
        #[source]
        last_error: io::Error,
    },

    #[error("Cannot {operation} while the client is {state}")]
    InvalidState {
        operation: &'static str,
        state: TrackerState,
    },

    #[error("No IPv4 address found for tracker {0}")]
    NoIpv4Endpoint(String),
}
