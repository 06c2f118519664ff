use std::time::Instant;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::peer_key::PeerKey;
use crate::udp::structs::transaction_id::TransactionId;

/// Identity values carried by every tracker request.
///
/// A session is a plain value: transitions return a new session instead of
/// mutating in place, and only the owning client decides when to keep one.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TrackerSession {
    /// The protocol identifier until a connect response has been accepted.
    pub connection_id: ConnectionId,
    pub transaction_id: TransactionId,
    pub peer_id: PeerId,
    pub key: PeerKey,
    /// When `connection_id` was issued, used for the expiry policy.
    pub connected_at: Option<Instant>,
}
