use std::fmt;
use crate::peer::enums::message_type::MessageType;
use crate::peer::enums::peer_frame::PeerFrame;

/// Length prefix in front of every post-handshake frame.
pub const FRAME_LENGTH_PREFIX: usize = 4;

impl PeerFrame {
    /// Builds a frame from a complete length-delimited body.
    pub fn from_body(body: &[u8]) -> PeerFrame {
        match body.split_first() {
            None => PeerFrame::KeepAlive,
            Some((id, payload)) => PeerFrame::Message {
                id: *id,
                payload: payload.to_vec(),
            },
        }
    }

    pub fn message_type(&self) -> Option<MessageType> {
        match self {
            PeerFrame::KeepAlive => None,
            PeerFrame::Message { id, .. } => MessageType::from_u8(*id),
        }
    }

    /// The frame as it goes on the wire, length prefix included.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            PeerFrame::KeepAlive => vec![0u8; FRAME_LENGTH_PREFIX],
            PeerFrame::Message { id, payload } => {
                let length = payload.len() as u32 + 1;
                let mut bytes = Vec::with_capacity(FRAME_LENGTH_PREFIX + length as usize);
                bytes.extend_from_slice(&length.to_be_bytes());
                bytes.push(*id);
                bytes.extend_from_slice(payload);
                bytes
            }
        }
    }
}

impl fmt::Display for PeerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerFrame::KeepAlive => write!(f, "keep-alive"),
            PeerFrame::Message { id, payload } => match MessageType::from_u8(*id) {
                Some(kind) => write!(f, "{kind} ({} bytes)", payload.len()),
                None => write!(f, "message {id} ({} bytes)", payload.len()),
            },
        }
    }
}
