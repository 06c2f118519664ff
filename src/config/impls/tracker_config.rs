use std::time::Duration;
use crate::config::enums::backoff_kind::BackoffKind;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::enums::backoff::Backoff;
use crate::tracker::structs::announce_params::AnnounceParams;
use crate::tracker::structs::retry_policy::RetryPolicy;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::port::Port;

impl TrackerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connection_ttl(&self) -> Duration {
        Duration::from_secs(self.connection_ttl_secs)
    }

    pub fn backoff(&self) -> Backoff {
        match self.backoff {
            BackoffKind::fixed => Backoff::Fixed(Duration::from_millis(self.backoff_base_ms)),
            BackoffKind::exponential => Backoff::Exponential {
                base: Duration::from_millis(self.backoff_base_ms),
                max: Duration::from_millis(self.backoff_max_ms.max(self.backoff_base_ms)),
            },
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.backoff())
    }

    pub fn announce_params(&self) -> AnnounceParams {
        AnnounceParams {
            event: self.event,
            num_want: NumberOfPeers(self.num_want),
            port: Port(self.listen_port),
            ..AnnounceParams::default()
        }
    }
}
