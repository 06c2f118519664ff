use std::io;
use std::thread;
use log::{debug, warn};
use crate::tracker::enums::backoff::Backoff;
use crate::tracker::structs::retry_error::RetryError;
use crate::tracker::structs::retry_policy::RetryPolicy;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Backoff) -> RetryPolicy {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Runs `operation` until it succeeds or `max_attempts` attempts have failed.
    ///
    /// The operation receives the 1-based attempt number. Only `io::Error`s are
    /// retried; anything the caller derives from a received response is outside
    /// this loop and never triggers another attempt.
    pub fn run<T, F>(&self, mut operation: F) -> Result<T, RetryError>
    where
        F: FnMut(u32) -> io::Result<T>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match operation(attempt) {
                Ok(value) => {
                    if attempt > 1 {
                        debug!("[RETRY] Succeeded on attempt {attempt}/{max_attempts}");
                    }
                    return Ok(value);
                }
                Err(error) if attempt >= max_attempts => {
                    warn!("[RETRY] Attempt {attempt}/{max_attempts} failed, giving up: {error}");
                    return Err(RetryError {
                        attempts: attempt,
                        last_error: error,
                    });
                }
                Err(error) => {
                    let delay = self.backoff.delay(attempt);
                    warn!("[RETRY] Attempt {attempt}/{max_attempts} failed: {error} (next in {}ms)", delay.as_millis());
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(DEFAULT_MAX_ATTEMPTS, Backoff::default())
    }
}
