use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::reactor::structs::stop_signal::StopSignal;

impl StopSignal {
    pub fn new() -> StopSignal {
        StopSignal {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Safe to call from any thread, any number of times.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
