use std::time::Duration;
use crate::config::structs::reactor_config::ReactorConfig;

impl ReactorConfig {
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }
}

impl Default for ReactorConfig {
    fn default() -> Self {
        crate::config::structs::configuration::Configuration::init().reactor
    }
}
