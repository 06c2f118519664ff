use std::collections::VecDeque;
use std::time::Instant;
use mio::net::TcpStream;
use crate::peer::enums::close_reason::CloseReason;
use crate::peer::enums::connection_state::ConnectionState;
use crate::peer::enums::peer_frame::PeerFrame;
use crate::peer::structs::connection_handle::ConnectionHandle;
use crate::peer::traits::peer_transport::PeerTransport;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::structs::peer_descriptor::PeerDescriptor;

/// One outbound peer, owned exclusively by the reactor.
#[derive(Debug)]
pub struct PeerConnection<S: PeerTransport = TcpStream> {
    pub(crate) handle: ConnectionHandle,
    pub(crate) descriptor: PeerDescriptor,
    pub(crate) info_hash: InfoHash,
    pub(crate) num_pieces: u32,
    pub(crate) state: ConnectionState,
    pub(crate) stream: Option<S>,
    pub(crate) transport_ready: bool,
    pub(crate) outbound: Vec<u8>,
    pub(crate) inbound: Vec<u8>,
    pub(crate) frames: VecDeque<PeerFrame>,
    pub(crate) remote_peer_id: Option<PeerId>,
    pub(crate) close_reason: Option<CloseReason>,
    pub(crate) max_frame_length: usize,
    pub(crate) read_chunk_size: usize,
    pub(crate) peer_hung_up: bool,
    /// The last `receive` stopped on its budget, not on `WouldBlock`.
    pub(crate) read_pending: bool,
    pub(crate) created_at: Instant,
}
