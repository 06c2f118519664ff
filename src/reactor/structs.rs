/// The event loop and the connections it owns.
pub mod connection_reactor;

/// Read and write interest, recomputed every iteration.
pub mod interest_sets;

/// What happened to every peer the reactor was given.
pub mod reactor_report;

/// Cancellation flag checked once per iteration.
pub mod stop_signal;
