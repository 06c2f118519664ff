use crate::tracker::enums::backoff::Backoff;

/// Bounded retry for one request/response exchange.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
}
