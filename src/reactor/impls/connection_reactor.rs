use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::time::{Duration, Instant};
use log::{debug, info};
use mio::{Events, Poll, Token};
use crate::config::structs::reactor_config::ReactorConfig;
use crate::peer::enums::close_reason::CloseReason;
use crate::peer::enums::peer_frame::PeerFrame;
use crate::peer::structs::connection_handle::ConnectionHandle;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::reactor::structs::connection_reactor::ConnectionReactor;
use crate::reactor::structs::interest_sets::InterestSets;
use crate::reactor::structs::reactor_report::ReactorReport;
use crate::reactor::structs::stop_signal::StopSignal;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::structs::peer_descriptor::PeerDescriptor;

struct Readiness {
    handle: ConnectionHandle,
    readable: bool,
    writable: bool,
    error: bool,
}

impl ConnectionReactor {
    pub fn new(config: ReactorConfig, self_peer_id: PeerId, info_hash: InfoHash, num_pieces: u32) -> io::Result<ConnectionReactor> {
        Ok(ConnectionReactor {
            poll: Poll::new()?,
            events: Events::with_capacity(config.events_capacity.max(1)),
            connections: BTreeMap::new(),
            registered: HashMap::new(),
            reported_established: BTreeSet::new(),
            next_handle: 0,
            config,
            self_peer_id,
            info_hash,
            num_pieces,
            report: ReactorReport::default(),
        })
    }

    /// Creates a connection for `descriptor`, stages the handshake and starts
    /// a non-blocking connect. A connect that fails immediately is closed and
    /// shows up in the report after the next sweep.
    pub fn add_peer(&mut self, descriptor: PeerDescriptor) -> ConnectionHandle {
        let handle = ConnectionHandle(self.next_handle);
        self.next_handle += 1;

        let mut connection = PeerConnection::new(handle, descriptor, self.info_hash, self.num_pieces)
            .with_limits(self.config.max_frame_length, self.config.read_chunk_size);
        connection.schedule_handshake(self.self_peer_id, self.info_hash);
        if let Err(e) = connection.begin_connect() {
            debug!("[REACTOR] {handle} {descriptor} connect failed: {e}");
        }
        self.connections.insert(handle, connection);
        handle
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn connection(&self, handle: ConnectionHandle) -> Option<&PeerConnection> {
        self.connections.get(&handle)
    }

    pub fn connection_mut(&mut self, handle: ConnectionHandle) -> Option<&mut PeerConnection> {
        self.connections.get_mut(&handle)
    }

    pub fn report(&self) -> &ReactorReport {
        &self.report
    }

    pub fn interest_sets(&self) -> InterestSets {
        InterestSets::compute(self.connections.values(), self.config.completion)
    }

    /// Runs until there is no interest left or `stop` fires, then closes
    /// every remaining connection. Post-handshake frames are discarded.
    pub fn run(&mut self, stop: &StopSignal) -> io::Result<ReactorReport> {
        self.run_with(stop, |_, _| {})
    }

    /// Same as [`run`](Self::run), handing every frame cut from a peer's
    /// stream to `sink` as soon as it is complete.
    pub fn run_with<F>(&mut self, stop: &StopSignal, mut sink: F) -> io::Result<ReactorReport>
    where
        F: FnMut(ConnectionHandle, PeerFrame),
    {
        info!("[REACTOR] Running with {} peers", self.connections.len());
        let poll_timeout = self.config.poll_timeout();

        let outcome = loop {
            if stop.is_triggered() {
                info!("[REACTOR] Stop requested");
                self.report.cancelled = true;
                break Ok(());
            }
            if self.interest_sets().is_empty() {
                break Ok(());
            }
            if let Err(e) = self.poll_once_with(poll_timeout, &mut sink) {
                break Err(e);
            }
        };

        let reason = if self.report.cancelled { CloseReason::Cancelled } else { CloseReason::Shutdown };
        self.shutdown(reason);
        outcome?;

        let report = std::mem::take(&mut self.report);
        info!("[REACTOR] Finished: {report}");
        Ok(report)
    }

    /// One iteration: register interest, wait at most `timeout`, dispatch,
    /// enforce the handshake deadline, sweep closed connections.
    pub fn poll_once(&mut self, timeout: Duration) -> io::Result<usize> {
        self.poll_once_with(timeout, &mut |_, _| {})
    }

    pub fn poll_once_with<F>(&mut self, timeout: Duration, sink: &mut F) -> io::Result<usize>
    where
        F: FnMut(ConnectionHandle, PeerFrame),
    {
        let sets = self.interest_sets();
        self.sync_registrations(&sets);

        // Edge-triggered: a connection that stopped reading on its budget
        // gets no new event, so it is served again without waiting.
        let carried: Vec<ConnectionHandle> = self.connections.iter()
            .filter(|(_, connection)| connection.has_read_pending())
            .map(|(handle, _)| *handle)
            .collect();
        let timeout = if carried.is_empty() { timeout } else { Duration::ZERO };

        let mut ready = self.wait(timeout)?;
        let signalled = ready.len();
        ready.extend(carried.into_iter().map(|handle| Readiness {
            handle,
            readable: true,
            writable: false,
            error: false,
        }));
        for readiness in &ready {
            self.dispatch(readiness, sink);
        }

        self.expire_handshakes(Instant::now());
        self.sweep();
        self.report.iterations += 1;
        Ok(signalled)
    }

    /// Closes every connection with `reason` and releases the transports.
    pub fn shutdown(&mut self, reason: CloseReason) {
        for connection in self.connections.values_mut() {
            connection.close(reason.clone());
        }
        self.sweep();
    }

    fn wait(&mut self, timeout: Duration) -> io::Result<Vec<Readiness>> {
        if let Err(e) = self.poll.poll(&mut self.events, Some(timeout)) {
            if e.kind() == io::ErrorKind::Interrupted {
                return Ok(Vec::new());
            }
            return Err(e);
        }

        Ok(self.events.iter().map(|event| Readiness {
            handle: ConnectionHandle::from(event.token()),
            readable: event.is_readable() || event.is_read_closed(),
            writable: event.is_writable(),
            error: event.is_error(),
        }).collect())
    }

    fn dispatch<F>(&mut self, readiness: &Readiness, sink: &mut F)
    where
        F: FnMut(ConnectionHandle, PeerFrame),
    {
        let Some(connection) = self.connections.get_mut(&readiness.handle) else {
            return;
        };

        if readiness.writable {
            connection.drain_outbound();
        }
        if readiness.readable {
            connection.receive();
        }
        while connection.pump_inbound() {}
        for frame in connection.take_frames() {
            sink(readiness.handle, frame);
        }

        if readiness.error && !connection.is_closed() {
            let error = connection.stream()
                .and_then(|stream| stream.take_error().ok().flatten())
                .unwrap_or_else(|| io::Error::other("socket error event"));
            connection.close(CloseReason::transport(&error));
        }
    }

    fn expire_handshakes(&mut self, now: Instant) {
        let timeout = self.config.handshake_timeout();
        for connection in self.connections.values_mut() {
            if connection.handshake_expired(now, timeout) {
                connection.close(CloseReason::HandshakeTimeout);
            }
        }
    }

    /// Brings the poller registrations in line with `sets`. A registration
    /// failure closes that one connection.
    fn sync_registrations(&mut self, sets: &InterestSets) {
        let registry = self.poll.registry();
        for (handle, connection) in self.connections.iter_mut() {
            let wanted = sets.interest_for(*handle);
            let current = self.registered.get(handle).copied();
            if wanted == current {
                continue;
            }
            let Some(stream) = connection.stream_mut() else {
                continue;
            };

            let token = Token::from(*handle);
            let result = match (current, wanted) {
                (None, Some(interest)) => registry.register(stream, token, interest),
                (Some(_), Some(interest)) => registry.reregister(stream, token, interest),
                (Some(_), None) => registry.deregister(stream),
                (None, None) => Ok(()),
            };

            match result {
                Ok(()) => match wanted {
                    Some(interest) => {
                        self.registered.insert(*handle, interest);
                    }
                    None => {
                        self.registered.remove(handle);
                    }
                },
                Err(e) => connection.close(CloseReason::transport(&e)),
            }
        }
    }

    /// Records newly established peers and removes closed connections,
    /// deregistering and dropping their transports.
    fn sweep(&mut self) {
        // The remote peer id survives closing, so a peer that handshakes and
        // hangs up within one iteration is still counted.
        for (handle, connection) in &self.connections {
            if connection.remote_peer_id().is_some() && self.reported_established.insert(*handle) {
                self.report.established.push((connection.descriptor(), connection.remote_peer_id()));
            }
        }

        let closed: Vec<ConnectionHandle> = self.connections.iter()
            .filter(|(_, connection)| connection.is_closed())
            .map(|(handle, _)| *handle)
            .collect();

        for handle in closed {
            let Some(mut connection) = self.connections.remove(&handle) else {
                continue;
            };
            if self.registered.remove(&handle).is_some() {
                if let Some(stream) = connection.stream_mut() {
                    if let Err(e) = self.poll.registry().deregister(stream) {
                        debug!("[REACTOR] {handle} deregister: {e}");
                    }
                }
            }
            drop(connection.release_transport());

            let reason = connection.close_reason().cloned().unwrap_or(CloseReason::Shutdown);
            self.report.closed.push((connection.descriptor(), reason));
        }
    }
}

impl Drop for ConnectionReactor {
    fn drop(&mut self) {
        if !self.connections.is_empty() {
            self.shutdown(CloseReason::Shutdown);
        }
    }
}
