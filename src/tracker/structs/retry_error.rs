use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Gave up after {attempts} attempts: {last_error}")]
pub struct RetryError {
    pub attempts: u32,
    #[source]
    pub last_error: io::Error,
}
