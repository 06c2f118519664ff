use crate::peer::enums::close_reason::CloseReason;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::structs::peer_descriptor::PeerDescriptor;

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ReactorReport {
    /// Peers that completed the handshake, with the id they presented.
    pub established: Vec<(PeerDescriptor, Option<PeerId>)>,
    /// Every connection that was torn down, and why.
    pub closed: Vec<(PeerDescriptor, CloseReason)>,
    pub iterations: u64,
    pub cancelled: bool,
}
