use crate::peer::enums::close_reason::CloseReason;
use crate::peer::structs::handshake::Handshake;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

pub const PROTOCOL_NAME: &[u8; 19] = b"BitTorrent protocol";
pub const HANDSHAKE_LENGTH: usize = 68;

impl Handshake {
    pub fn new(info_hash: InfoHash, peer_id: PeerId) -> Handshake {
        Handshake {
            reserved: [0u8; 8],
            info_hash,
            peer_id,
        }
    }

    pub fn to_bytes(&self) -> [u8; HANDSHAKE_LENGTH] {
        let mut bytes = [0u8; HANDSHAKE_LENGTH];
        bytes[0] = PROTOCOL_NAME.len() as u8;
        bytes[1..20].copy_from_slice(PROTOCOL_NAME);
        bytes[20..28].copy_from_slice(&self.reserved);
        bytes[28..48].copy_from_slice(&self.info_hash.0);
        bytes[48..68].copy_from_slice(&self.peer_id.0);
        bytes
    }

    /// Parses exactly one handshake frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Handshake, CloseReason> {
        if bytes.len() != HANDSHAKE_LENGTH {
            return Err(CloseReason::InvalidHandshake(format!("{} bytes, expected {HANDSHAKE_LENGTH}", bytes.len())));
        }
        if bytes[0] as usize != PROTOCOL_NAME.len() || &bytes[1..20] != PROTOCOL_NAME {
            return Err(CloseReason::InvalidHandshake(String::from("unknown protocol name")));
        }

        let mut handshake = Handshake::new(InfoHash([0u8; 20]), PeerId([0u8; 20]));
        handshake.reserved.copy_from_slice(&bytes[20..28]);
        handshake.info_hash.0.copy_from_slice(&bytes[28..48]);
        handshake.peer_id.0.copy_from_slice(&bytes[48..68]);
        Ok(handshake)
    }
}
