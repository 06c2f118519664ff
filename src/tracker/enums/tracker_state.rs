use crate::tracker::enums::failure_kind::FailureKind;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Connecting,
    Connected,
    Announcing,
    Announced,
    /// Terminal for the current session generation.
    Failed(FailureKind),
}
