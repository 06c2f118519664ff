use std::time::{Duration, Instant};
use crate::common::common::{generate_key, generate_transaction_id};
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::tracker_session::TrackerSession;
use crate::udp::enums::action::Action;
use crate::udp::enums::response::Response;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::peer_key::PeerKey;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::PROTOCOL_IDENTIFIER;

impl TrackerSession {
    pub fn new(peer_id: PeerId) -> TrackerSession {
        TrackerSession {
            connection_id: ConnectionId(PROTOCOL_IDENTIFIER),
            transaction_id: TransactionId(generate_transaction_id()),
            peer_id,
            key: PeerKey(generate_key()),
            connected_at: None,
        }
    }

    pub fn generate() -> TrackerSession {
        TrackerSession::new(PeerId::generate())
    }

    /// Same identity, fresh transaction id for the next request.
    pub fn next_transaction(self) -> TrackerSession {
        TrackerSession {
            transaction_id: TransactionId(generate_transaction_id()),
            ..self
        }
    }

    pub fn connected(self, connection_id: ConnectionId, now: Instant) -> TrackerSession {
        TrackerSession {
            connection_id,
            connected_at: Some(now),
            ..self
        }
    }

    /// A new session generation: new transaction id and key, no connection id.
    /// The peer id is kept for the lifetime of the process.
    pub fn renewed(self) -> TrackerSession {
        TrackerSession::new(self.peer_id)
    }

    pub fn is_connected(&self) -> bool {
        self.connected_at.is_some()
    }

    pub fn is_connection_fresh(&self, now: Instant, ttl: Duration) -> bool {
        match self.connected_at {
            None => false,
            Some(at) => now.saturating_duration_since(at) < ttl,
        }
    }

    /// Checks a decoded response against the outstanding request.
    ///
    /// The action has to be `expected` or `Error`, and the transaction id has
    /// to match this session. A matching error packet is returned as
    /// [`TrackerError::ErrorPacket`].
    pub fn validate(&self, response: &Response, expected: Action) -> Result<(), TrackerError> {
        let action = response.action();
        if action != expected && action != Action::Error {
            return Err(TrackerError::ProtocolMismatch {
                field: "action",
                expected: expected.to_i32() as i64,
                received: action.to_i32() as i64,
            });
        }

        let received = response.transaction_id();
        if received != self.transaction_id {
            return Err(TrackerError::ProtocolMismatch {
                field: "transaction_id",
                expected: self.transaction_id.0 as i64,
                received: received.0 as i64,
            });
        }

        if let Response::Error(error) = response {
            return Err(TrackerError::ErrorPacket {
                transaction_id: error.transaction_id,
                message: error.message.to_string(),
            });
        }
        Ok(())
    }
}
