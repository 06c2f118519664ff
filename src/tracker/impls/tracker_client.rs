use std::net::SocketAddr;
use std::time::{Duration, Instant};
use log::{debug, info, warn};
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::tracker_state::TrackerState;
use crate::tracker::structs::announce_params::AnnounceParams;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::retry_policy::RetryPolicy;
use crate::tracker::structs::tracker_client::TrackerClient;
use crate::tracker::structs::tracker_session::TrackerSession;
use crate::tracker::structs::udp_transport::UdpTransport;
use crate::tracker::traits::tracker_transport::TrackerTransport;
use crate::udp::enums::action::Action;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::udp::{encode_announce_with, encode_connect};

pub const DEFAULT_CONNECTION_TTL: Duration = Duration::from_secs(60);

impl TrackerClient<UdpTransport> {
    pub fn new(config: &TrackerConfig) -> TrackerClient<UdpTransport> {
        TrackerClient::with_transport(UdpTransport::new(config.recv_buffer_size), config.retry_policy(), TrackerSession::generate())
            .with_connection_ttl(config.connection_ttl())
            .with_announce_params(config.announce_params())
    }
}

impl<T: TrackerTransport> TrackerClient<T> {
    pub fn with_transport(transport: T, retry_policy: RetryPolicy, session: TrackerSession) -> TrackerClient<T> {
        TrackerClient {
            session,
            state: TrackerState::Idle,
            transport,
            retry_policy,
            connection_ttl: DEFAULT_CONNECTION_TTL,
            announce_params: AnnounceParams::default(),
        }
    }

    pub fn with_connection_ttl(mut self, connection_ttl: Duration) -> TrackerClient<T> {
        self.connection_ttl = connection_ttl;
        self
    }

    pub fn with_announce_params(mut self, announce_params: AnnounceParams) -> TrackerClient<T> {
        self.announce_params = announce_params;
        self
    }

    pub fn session(&self) -> &TrackerSession {
        &self.session
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Starts a new session generation and returns to `Idle`.
    pub fn reset(&mut self) {
        self.session = self.session.renewed();
        debug!("[TRACKER] Session reset ({} -> idle)", self.state);
        self.state = TrackerState::Idle;
    }

    /// Obtains a connection id from the tracker at `endpoint`.
    ///
    /// The session is only replaced once the response has passed validation;
    /// any error leaves the previous session untouched and the client `Failed`.
    pub fn connect(&mut self, endpoint: SocketAddr, timeout: Duration) -> Result<(), TrackerError> {
        self.ensure_usable("connect")?;
        self.transition(TrackerState::Connecting);

        match self.try_connect(endpoint, timeout) {
            Ok(session) => {
                self.session = session;
                self.transition(TrackerState::Connected);
                info!("[TRACKER] Connected to {endpoint} (connection id {})", session.connection_id.0);
                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    /// Announces with the client's configured parameters.
    pub fn announce(&mut self, endpoint: SocketAddr, total_length: u64, info_hash: &InfoHash, timeout: Duration) -> Result<AnnounceResponse, TrackerError> {
        let params = self.announce_params;
        self.announce_with(endpoint, total_length, info_hash, &params, timeout)
    }

    /// Announces with explicit parameters.
    ///
    /// Requires a connection id from a previous `connect`. An id older than
    /// the connection ttl is renewed first.
    pub fn announce_with(&mut self, endpoint: SocketAddr, total_length: u64, info_hash: &InfoHash, params: &AnnounceParams, timeout: Duration) -> Result<AnnounceResponse, TrackerError> {
        self.ensure_usable("announce")?;
        if !self.state.has_connection() {
            return Err(TrackerError::InvalidState {
                operation: "announce",
                state: self.state,
            });
        }
        if !self.session.is_connection_fresh(Instant::now(), self.connection_ttl) {
            debug!("[TRACKER] Connection id {} expired, reconnecting", self.session.connection_id.0);
            self.connect(endpoint, timeout)?;
        }
        self.transition(TrackerState::Announcing);

        match self.try_announce(endpoint, total_length, info_hash, params, timeout) {
            Ok((session, response)) => {
                self.session = session;
                self.transition(TrackerState::Announced);
                info!(
                    "[TRACKER] Announced {info_hash} to {endpoint}: {} peers, {} seeders, {} leechers, interval {}s",
                    response.peers.len(),
                    response.seeders.0,
                    response.leechers.0,
                    response.announce_interval.0
                );
                Ok(response)
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    fn try_connect(&mut self, endpoint: SocketAddr, timeout: Duration) -> Result<TrackerSession, TrackerError> {
        let pending = self.session.next_transaction();
        let packet = encode_connect(&pending)?;
        let bytes = self.exchange(endpoint, &packet, timeout)?;

        let response = Response::from_bytes(&bytes)?;
        pending.validate(&response, Action::Connect)?;
        match response {
            Response::Connect(connect) => Ok(pending.connected(connect.connection_id, Instant::now())),
            other => Err(Self::unexpected(Action::Connect, &other)),
        }
    }

    fn try_announce(&mut self, endpoint: SocketAddr, total_length: u64, info_hash: &InfoHash, params: &AnnounceParams, timeout: Duration) -> Result<(TrackerSession, AnnounceResponse), TrackerError> {
        let pending = self.session.next_transaction();
        let packet = encode_announce_with(&pending, total_length, info_hash, params)?;
        let bytes = self.exchange(endpoint, &packet, timeout)?;

        let response = Response::from_bytes(&bytes)?;
        pending.validate(&response, Action::Announce)?;
        match response {
            Response::Announce(announce) => Ok((pending, announce)),
            other => Err(Self::unexpected(Action::Announce, &other)),
        }
    }

    fn exchange(&mut self, endpoint: SocketAddr, packet: &[u8], timeout: Duration) -> Result<Vec<u8>, TrackerError> {
        let transport = &mut self.transport;
        let bytes = self.retry_policy.run(|attempt| {
            debug!("[TRACKER] Attempt {attempt}: {} bytes to {endpoint}", packet.len());
            transport.exchange(endpoint, packet, timeout)
        })?;
        Ok(bytes)
    }

    fn ensure_usable(&self, operation: &'static str) -> Result<(), TrackerError> {
        if self.state.is_failed() {
            return Err(TrackerError::InvalidState {
                operation,
                state: self.state,
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: TrackerState) {
        debug!("[TRACKER] {} -> {next}", self.state);
        self.state = next;
    }

    fn fail(&mut self, error: TrackerError) -> TrackerError {
        warn!("[TRACKER] {} failed: {error}", self.state);
        self.transition(TrackerState::Failed(error.failure_kind()));
        error
    }

    fn unexpected(expected: Action, response: &Response) -> TrackerError {
        TrackerError::ProtocolMismatch {
            field: "action",
            expected: expected.to_i32() as i64,
            received: response.action().to_i32() as i64,
        }
    }
}
