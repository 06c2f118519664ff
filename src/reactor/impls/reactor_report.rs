use std::fmt;
use crate::peer::enums::close_reason::CloseReason;
use crate::reactor::structs::reactor_report::ReactorReport;

impl ReactorReport {
    /// Closed for a reason other than our own teardown.
    pub fn failed(&self) -> usize {
        self.closed.iter().filter(|(_, reason)| !reason.is_local()).count()
    }

    pub fn timed_out(&self) -> usize {
        self.closed.iter().filter(|(_, reason)| matches!(reason, CloseReason::HandshakeTimeout)).count()
    }
}

impl fmt::Display for ReactorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} established, {} failed ({} timed out), {} iterations{}",
            self.established.len(),
            self.failed(),
            self.timed_out(),
            self.iterations,
            if self.cancelled { ", cancelled" } else { "" }
        )
    }
}
