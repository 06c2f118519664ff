use std::borrow::Cow;
use crate::udp::structs::malformed_response::MalformedResponse;

impl MalformedResponse {
    pub fn text(reason: &'static str) -> Self {
        Self { reason: Cow::Borrowed(reason) }
    }

    pub fn owned(reason: String) -> Self {
        Self { reason: Cow::Owned(reason) }
    }
}
