use std::time::Duration;
use crate::tracker::enums::tracker_state::TrackerState;
use crate::tracker::structs::announce_params::AnnounceParams;
use crate::tracker::structs::retry_policy::RetryPolicy;
use crate::tracker::structs::tracker_session::TrackerSession;
use crate::tracker::structs::udp_transport::UdpTransport;
use crate::tracker::traits::tracker_transport::TrackerTransport;

pub struct TrackerClient<T: TrackerTransport = UdpTransport> {
    pub(crate) session: TrackerSession,
    pub(crate) state: TrackerState,
    pub(crate) transport: T,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) connection_ttl: Duration,
    pub(crate) announce_params: AnnounceParams,
}
