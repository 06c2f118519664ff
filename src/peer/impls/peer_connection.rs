use std::collections::VecDeque;
use std::io;
use std::io::{Read, Write};
use std::time::{Duration, Instant};
use log::{debug, info, warn};
use mio::net::TcpStream;
use crate::peer::enums::close_reason::CloseReason;
use crate::peer::enums::connection_state::ConnectionState;
use crate::peer::enums::peer_frame::PeerFrame;
use crate::peer::impls::handshake::HANDSHAKE_LENGTH;
use crate::peer::impls::peer_frame::FRAME_LENGTH_PREFIX;
use crate::peer::structs::connection_handle::ConnectionHandle;
use crate::peer::structs::handshake::Handshake;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::peer::traits::peer_transport::PeerTransport;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::structs::peer_descriptor::PeerDescriptor;

pub const DEFAULT_MAX_FRAME_LENGTH: usize = 1_048_576;
pub const DEFAULT_READ_CHUNK_SIZE: usize = 16_384;
/// Reads one `receive` call may issue before yielding to other connections.
pub const READS_PER_RECEIVE: usize = 4;

impl PeerConnection<TcpStream> {
    /// Starts a non-blocking TCP connect to the peer.
    ///
    /// Returns as soon as the connect is in progress. Completion is observed
    /// through writable readiness in [`drain_outbound`](Self::drain_outbound).
    /// A connect that cannot even be started closes the connection.
    pub fn begin_connect(&mut self) -> io::Result<()> {
        if self.stream.is_some() || self.state.is_closed() {
            return Ok(());
        }
        match TcpStream::connect(self.descriptor.socket_addr()) {
            Ok(stream) => {
                debug!("[PEER] {} {} connect started", self.handle, self.descriptor);
                self.stream = Some(stream);
                Ok(())
            }
            Err(error) => {
                self.close(CloseReason::connect_failed(&error));
                Err(error)
            }
        }
    }
}

impl<S: PeerTransport> PeerConnection<S> {
    pub fn new(handle: ConnectionHandle, descriptor: PeerDescriptor, info_hash: InfoHash, num_pieces: u32) -> PeerConnection<S> {
        PeerConnection {
            handle,
            descriptor,
            info_hash,
            num_pieces,
            state: ConnectionState::Connecting,
            stream: None,
            transport_ready: false,
            outbound: Vec::new(),
            inbound: Vec::new(),
            frames: VecDeque::new(),
            remote_peer_id: None,
            close_reason: None,
            max_frame_length: DEFAULT_MAX_FRAME_LENGTH,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            peer_hung_up: false,
            read_pending: false,
            created_at: Instant::now(),
        }
    }

    /// A connection over an already opened transport.
    pub fn with_transport(handle: ConnectionHandle, descriptor: PeerDescriptor, info_hash: InfoHash, num_pieces: u32, stream: S) -> PeerConnection<S> {
        PeerConnection {
            stream: Some(stream),
            ..PeerConnection::new(handle, descriptor, info_hash, num_pieces)
        }
    }

    pub fn with_limits(mut self, max_frame_length: usize, read_chunk_size: usize) -> PeerConnection<S> {
        self.max_frame_length = max_frame_length;
        self.read_chunk_size = read_chunk_size.max(1);
        self
    }

    pub fn handle(&self) -> ConnectionHandle {
        self.handle
    }

    pub fn descriptor(&self) -> PeerDescriptor {
        self.descriptor
    }

    pub fn info_hash(&self) -> InfoHash {
        self.info_hash
    }

    pub fn num_pieces(&self) -> u32 {
        self.num_pieces
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    pub fn close_reason(&self) -> Option<&CloseReason> {
        self.close_reason.as_ref()
    }

    pub fn remote_peer_id(&self) -> Option<PeerId> {
        self.remote_peer_id
    }

    pub fn outbound(&self) -> &[u8] {
        &self.outbound
    }

    pub fn inbound(&self) -> &[u8] {
        &self.inbound
    }

    pub fn has_pending_output(&self) -> bool {
        !self.state.is_closed() && !self.outbound.is_empty()
    }

    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    pub fn stream_mut(&mut self) -> Option<&mut S> {
        self.stream.as_mut()
    }

    /// Stages our handshake in the outbound buffer.
    ///
    /// Only a connection still in `Connecting` stages anything; calling it
    /// again once staged leaves the buffer alone.
    pub fn schedule_handshake(&mut self, self_peer_id: PeerId, info_hash: InfoHash) {
        if self.state != ConnectionState::Connecting {
            debug!("[PEER] {} handshake already scheduled ({})", self.handle, self.state);
            return;
        }
        self.info_hash = info_hash;
        self.outbound.extend_from_slice(&Handshake::new(info_hash, self_peer_id).to_bytes());
        self.state = ConnectionState::HandshakeStaged;
    }

    /// Appends raw peer-wire bytes to the outbound buffer.
    pub fn enqueue(&mut self, bytes: &[u8]) -> bool {
        if self.state.is_closed() {
            return false;
        }
        self.outbound.extend_from_slice(bytes);
        true
    }

    pub fn enqueue_frame(&mut self, frame: &PeerFrame) -> bool {
        self.enqueue(&frame.encode())
    }

    /// Writes as much of the outbound buffer as the transport takes.
    ///
    /// Returns the number of bytes written; `0` means "try again later".
    /// The first successful write moves a staged handshake in flight.
    pub fn drain_outbound(&mut self) -> usize {
        if self.state.is_closed() || self.outbound.is_empty() || !self.ensure_transport_ready() {
            return 0;
        }
        let Some(stream) = self.stream.as_mut() else {
            return 0;
        };

        let mut written = 0;
        let mut failure = None;
        while written < self.outbound.len() {
            match stream.write(&self.outbound[written..]) {
                Ok(0) => {
                    failure = Some(CloseReason::PeerHungUp);
                    break;
                }
                Ok(n) => written += n,
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    failure = Some(CloseReason::transport(&e));
                    break;
                }
            }
        }

        if written > 0 {
            if let Err(e) = stream.flush() {
                if e.kind() != io::ErrorKind::WouldBlock {
                    failure.get_or_insert(CloseReason::transport(&e));
                }
            }
            self.outbound.drain(..written);
            if self.state == ConnectionState::HandshakeStaged {
                debug!("[PEER] {} {} handshake in flight", self.handle, self.descriptor);
                self.state = ConnectionState::HandshakeInFlight;
            }
        }
        if let Some(reason) = failure {
            self.close(reason);
        }
        written
    }

    /// Reads what the transport has available into the inbound buffer, at
    /// most [`READS_PER_RECEIVE`] chunks per call.
    ///
    /// When the budget runs out before `WouldBlock`, [`has_read_pending`](Self::has_read_pending)
    /// reports it so the caller can come back without waiting for readiness.
    /// End of stream is remembered and acted on by [`pump_inbound`](Self::pump_inbound)
    /// once the buffered bytes have been consumed.
    pub fn receive(&mut self) -> usize {
        self.read_pending = false;
        if self.state.is_closed() || !self.ensure_transport_ready() {
            return 0;
        }
        let Some(stream) = self.stream.as_mut() else {
            return 0;
        };

        let mut chunk = vec![0u8; self.read_chunk_size];
        let mut received = 0;
        let mut reads = 0;
        let mut failure = None;
        loop {
            if reads == READS_PER_RECEIVE {
                self.read_pending = true;
                break;
            }
            match stream.read(&mut chunk) {
                Ok(0) => {
                    self.peer_hung_up = true;
                    break;
                }
                Ok(n) => {
                    self.inbound.extend_from_slice(&chunk[..n]);
                    received += n;
                    reads += 1;
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    failure = Some(CloseReason::transport(&e));
                    break;
                }
            }
        }
        if let Some(reason) = failure {
            self.close(reason);
        }
        received
    }

    pub fn has_read_pending(&self) -> bool {
        self.read_pending && !self.state.is_closed()
    }

    pub fn feed_inbound(&mut self, bytes: &[u8]) {
        if !self.state.is_closed() {
            self.inbound.extend_from_slice(bytes);
        }
    }

    /// Consumes at most one complete frame from the inbound buffer.
    ///
    /// Before the handshake the first 68 bytes are the peer's reply; after it
    /// every frame is a 4-byte big-endian length followed by that many bytes.
    /// Returns `false` when no complete frame is buffered.
    pub fn pump_inbound(&mut self) -> bool {
        let consumed = match self.state {
            ConnectionState::Closed => return false,
            ConnectionState::Connecting | ConnectionState::HandshakeStaged => false,
            ConnectionState::HandshakeInFlight => self.consume_handshake(),
            ConnectionState::Established => self.consume_frame(),
        };

        if !consumed && self.peer_hung_up && !self.state.is_closed() {
            self.close(CloseReason::PeerHungUp);
        }
        consumed
    }

    /// Frames cut since the last call, in arrival order.
    pub fn take_frames(&mut self) -> Vec<PeerFrame> {
        self.frames.drain(..).collect()
    }

    /// Not `Established` within `timeout` of being created.
    pub fn handshake_expired(&self, now: Instant, timeout: Duration) -> bool {
        self.state.is_handshaking() && now.saturating_duration_since(self.created_at) >= timeout
    }

    /// Moves to `Closed`, discards both buffers and shuts the transport down.
    /// The first reason recorded wins.
    pub fn close(&mut self, reason: CloseReason) {
        if self.state.is_closed() {
            return;
        }
        if reason.is_local() {
            debug!("[PEER] {} {} closed: {reason}", self.handle, self.descriptor);
        } else {
            warn!("[PEER] {} {} closed while {}: {reason}", self.handle, self.descriptor, self.state);
        }
        self.state = ConnectionState::Closed;
        self.close_reason = Some(reason);
        self.outbound.clear();
        self.inbound.clear();
        if let Some(stream) = self.stream.as_mut() {
            if let Err(e) = stream.shutdown() {
                debug!("[PEER] {} shutdown: {e}", self.handle);
            }
        }
    }

    /// Drops the transport; the socket closes with it.
    pub fn release_transport(&mut self) -> Option<S> {
        self.stream.take()
    }

    fn ensure_transport_ready(&mut self) -> bool {
        if self.transport_ready {
            return true;
        }
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };
        match stream.poll_connected() {
            Ok(true) => {
                debug!("[PEER] {} {} transport connected", self.handle, self.descriptor);
                self.transport_ready = true;
                true
            }
            Ok(false) => false,
            Err(e) => {
                self.close(CloseReason::connect_failed(&e));
                false
            }
        }
    }

    fn consume_handshake(&mut self) -> bool {
        if self.inbound.len() < HANDSHAKE_LENGTH {
            return false;
        }
        let reply: Vec<u8> = self.inbound.drain(..HANDSHAKE_LENGTH).collect();
        let handshake = match Handshake::from_bytes(&reply) {
            Ok(handshake) => handshake,
            Err(reason) => {
                self.close(reason);
                return false;
            }
        };
        if handshake.info_hash != self.info_hash {
            self.close(CloseReason::ProtocolMismatch {
                expected: self.info_hash,
                received: handshake.info_hash,
            });
            return false;
        }

        self.remote_peer_id = Some(handshake.peer_id);
        self.state = ConnectionState::Established;
        info!(
            "[PEER] {} {} established ({})",
            self.handle,
            self.descriptor,
            handshake.peer_id.get_client_name().unwrap_or("unknown client")
        );
        true
    }

    fn consume_frame(&mut self) -> bool {
        if self.inbound.len() < FRAME_LENGTH_PREFIX {
            return false;
        }
        let mut prefix = [0u8; FRAME_LENGTH_PREFIX];
        prefix.copy_from_slice(&self.inbound[..FRAME_LENGTH_PREFIX]);
        let length = u32::from_be_bytes(prefix) as usize;
        if length > self.max_frame_length {
            self.close(CloseReason::FrameTooLarge { length });
            return false;
        }
        if self.inbound.len() < FRAME_LENGTH_PREFIX + length {
            return false;
        }

        let frame = PeerFrame::from_body(&self.inbound[FRAME_LENGTH_PREFIX..FRAME_LENGTH_PREFIX + length]);
        self.inbound.drain(..FRAME_LENGTH_PREFIX + length);
        debug!("[PEER] {} {} <- {frame}", self.handle, self.descriptor);
        self.frames.push_back(frame);
        true
    }
}
