use crate::config::enums::completion_policy::CompletionPolicy;

impl CompletionPolicy {
    pub fn retires_established(&self) -> bool {
        matches!(self, CompletionPolicy::until_handshaken)
    }
}
