use std::fmt;
use crate::tracker::enums::tracker_state::TrackerState;

impl TrackerState {
    pub fn is_failed(&self) -> bool {
        matches!(self, TrackerState::Failed(_))
    }

    /// A connection id has been obtained and may be used for an announce.
    pub fn has_connection(&self) -> bool {
        matches!(self, TrackerState::Connected | TrackerState::Announced)
    }
}

impl fmt::Display for TrackerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerState::Idle => write!(f, "idle"),
            TrackerState::Connecting => write!(f, "connecting"),
            TrackerState::Connected => write!(f, "connected"),
            TrackerState::Announcing => write!(f, "announcing"),
            TrackerState::Announced => write!(f, "announced"),
            TrackerState::Failed(kind) => write!(f, "failed ({kind:?})"),
        }
    }
}
