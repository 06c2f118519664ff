use std::time::Duration;

/// Delay inserted after a failed attempt. Both schedules are monotonic
/// non-decreasing in the attempt number and bounded.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Backoff {
    Fixed(Duration),
    Exponential {
        base: Duration,
        max: Duration,
    },
}
