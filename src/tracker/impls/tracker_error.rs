use crate::tracker::enums::failure_kind::FailureKind;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::retry_error::RetryError;

impl TrackerError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            TrackerError::Transport(_) | TrackerError::NoIpv4Endpoint(_) | TrackerError::InvalidState { .. } => FailureKind::Transport,
            TrackerError::ProtocolMismatch { .. } => FailureKind::ProtocolMismatch,
            TrackerError::ErrorPacket { .. } => FailureKind::ErrorPacket,
            TrackerError::MalformedResponse(_) => FailureKind::MalformedResponse,
            TrackerError::Unreachable { .. } => FailureKind::Unreachable,
        }
    }
}

impl From<RetryError> for TrackerError {
    fn from(e: RetryError) -> Self {
        TrackerError::Unreachable {
            attempts: e.attempts,
            last_error: e.last_error,
        }
    }
}
