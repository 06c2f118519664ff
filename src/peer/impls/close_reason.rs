use std::io;
use crate::peer::enums::close_reason::CloseReason;

impl CloseReason {
    pub fn transport(error: &io::Error) -> CloseReason {
        CloseReason::Transport {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn connect_failed(error: &io::Error) -> CloseReason {
        CloseReason::ConnectFailed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// Closed by our side rather than by the peer or the network.
    pub fn is_local(&self) -> bool {
        matches!(self, CloseReason::Shutdown | CloseReason::Cancelled)
    }
}
