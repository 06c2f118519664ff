use std::time::Duration;
use crate::tracker::enums::backoff::Backoff;

impl Backoff {
    /// Delay to wait after failed attempt number `attempt` (1-based).
    /// The first retry waits `base`.
    pub fn delay(&self, attempt: u32) -> Duration {
        match *self {
            Backoff::Fixed(delay) => delay,
            Backoff::Exponential { base, max } => {
                let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
                base.saturating_mul(factor).min(max)
            }
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Exponential {
            base: Duration::from_millis(250),
            max: Duration::from_secs(4),
        }
    }
}
