/// Announce event types from BitTorrent protocol.
///
/// Represents the event parameter in announce requests:
/// - `None` - Regular update
/// - `Completed` - Download completed (became a seeder)
/// - `Started` - New download started
/// - `Stopped` - Download stopped
pub mod announce_event;

/// Delay schedule between retry attempts.
pub mod backoff;

/// Which kind of failure parked a client in `Failed`.
pub mod failure_kind;

/// Typed errors surfaced by the client.
pub mod tracker_error;

/// Client state machine.
pub mod tracker_state;
