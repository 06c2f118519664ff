use std::fmt;
use crate::peer::enums::connection_state::ConnectionState;

impl ConnectionState {
    pub fn is_closed(&self) -> bool {
        matches!(self, ConnectionState::Closed)
    }

    pub fn is_established(&self) -> bool {
        matches!(self, ConnectionState::Established)
    }

    /// Still waiting on the connect or the handshake reply.
    pub fn is_handshaking(&self) -> bool {
        matches!(self, ConnectionState::Connecting | ConnectionState::HandshakeStaged | ConnectionState::HandshakeInFlight)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Connecting => write!(f, "connecting"),
            ConnectionState::HandshakeStaged => write!(f, "handshake staged"),
            ConnectionState::HandshakeInFlight => write!(f, "handshake in flight"),
            ConnectionState::Established => write!(f, "established"),
            ConnectionState::Closed => write!(f, "closed"),
        }
    }
}
