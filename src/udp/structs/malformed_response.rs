use std::borrow::Cow;
use thiserror::Error;

/// A tracker reply that cannot be parsed: shorter than its mandatory header,
/// a truncated peer list, or an action this request cannot be answered with.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("Malformed tracker response: {reason}")]
pub struct MalformedResponse {
    pub reason: Cow<'static, str>,
}
