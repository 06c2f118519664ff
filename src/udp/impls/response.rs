use std::convert::TryInto;
use std::io;
use std::io::{Cursor, Write};
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::udp::enums::action::Action;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::malformed_response::MalformedResponse;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::peer_descriptor::PeerDescriptor;
use crate::udp::structs::port::Port;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{
    ANNOUNCE_RESPONSE_HEADER_SIZE,
    CONNECT_RESPONSE_SIZE,
    ERROR_RESPONSE_HEADER_SIZE,
    PEER_RECORD_SIZE
};

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceResponse> for Response {
    fn from(r: AnnounceResponse) -> Self {
        Self::Announce(r)
    }
}

impl From<ErrorResponse> for Response {
    fn from(r: ErrorResponse) -> Self {
        Self::Error(r)
    }
}

impl Response {
    pub fn action(&self) -> Action {
        match self {
            Response::Connect(_) => Action::Connect,
            Response::Announce(_) => Action::Announce,
            Response::Error(_) => Action::Error,
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Response::Connect(r) => r.transaction_id,
            Response::Announce(r) => r.transaction_id,
            Response::Error(r) => r.transaction_id,
        }
    }

    /// Serializes a response the way a tracker would put it on the wire.
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Response::Connect(r) => {
                bytes.write_i32::<NetworkEndian>(Action::Connect.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::Announce(r) => {
                bytes.write_i32::<NetworkEndian>(Action::Announce.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i32::<NetworkEndian>(r.announce_interval.0)?;
                bytes.write_i32::<NetworkEndian>(r.leechers.0)?;
                bytes.write_i32::<NetworkEndian>(r.seeders.0)?;

                let peer_count = r.peers.len();
                if peer_count > 0 {
                    let mut peer_buffer = Vec::with_capacity(peer_count * PEER_RECORD_SIZE);
                    for peer in &r.peers {
                        peer_buffer.extend_from_slice(&peer.ip_address.octets());
                        peer_buffer.write_u16::<NetworkEndian>(peer.port.0)?;
                    }
                    bytes.write_all(&peer_buffer)?;
                }
            }
            Response::Error(r) => {
                bytes.write_i32::<NetworkEndian>(Action::Error.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_all(r.message.as_bytes())?;
            }
        }

        Ok(())
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Response::Connect(_) => CONNECT_RESPONSE_SIZE,
            Response::Announce(r) => ANNOUNCE_RESPONSE_HEADER_SIZE + (r.peers.len() * PEER_RECORD_SIZE),
            Response::Error(r) => ERROR_RESPONSE_HEADER_SIZE + r.message.len(),
        }
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Parses any tracker reply. Every length is checked before it is read,
    /// a short or truncated packet is reported, never indexed past its end.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MalformedResponse> {
        if bytes.len() < ERROR_RESPONSE_HEADER_SIZE {
            return Err(MalformedResponse::text("Packet shorter than the 8 byte response header"));
        }

        let mut cursor = Cursor::new(bytes);
        let action = cursor.read_i32::<NetworkEndian>().map_err(header_err)?;
        let transaction_id = TransactionId(cursor.read_i32::<NetworkEndian>().map_err(header_err)?);

        match Action::from_i32(action) {
            Some(Action::Connect) => {
                if bytes.len() < CONNECT_RESPONSE_SIZE {
                    return Err(MalformedResponse::owned(format!(
                        "Connect response is {} bytes, expected {CONNECT_RESPONSE_SIZE}",
                        bytes.len()
                    )));
                }
                let connection_id = cursor.read_i64::<NetworkEndian>().map_err(header_err)?;

                Ok(ConnectResponse {
                    connection_id: ConnectionId(connection_id),
                    transaction_id,
                }
                    .into())
            }

            Some(Action::Announce) => {
                if bytes.len() < ANNOUNCE_RESPONSE_HEADER_SIZE {
                    return Err(MalformedResponse::owned(format!(
                        "Announce response is {} bytes, header needs {ANNOUNCE_RESPONSE_HEADER_SIZE}",
                        bytes.len()
                    )));
                }
                let announce_interval = cursor.read_i32::<NetworkEndian>().map_err(header_err)?;
                let leechers = cursor.read_i32::<NetworkEndian>().map_err(header_err)?;
                let seeders = cursor.read_i32::<NetworkEndian>().map_err(header_err)?;

                let peers = parse_ipv4_peers(&bytes[ANNOUNCE_RESPONSE_HEADER_SIZE..])?;
                if peers.len() as i64 != i64::from(seeders) + i64::from(leechers) {
                    log::debug!(
                        "[UDP] Announce reply lists {} peers for {seeders} seeders / {leechers} leechers",
                        peers.len()
                    );
                }

                Ok(AnnounceResponse {
                    transaction_id,
                    announce_interval: AnnounceInterval(announce_interval),
                    leechers: NumberOfPeers(leechers),
                    seeders: NumberOfPeers(seeders),
                    peers,
                }
                    .into())
            }

            Some(Action::Error) => {
                let message = String::from_utf8_lossy(&bytes[ERROR_RESPONSE_HEADER_SIZE..]).into_owned();

                Ok(ErrorResponse {
                    transaction_id,
                    message: message.into(),
                }
                    .into())
            }

            None => Err(MalformedResponse::owned(format!("Unknown action {action}"))),
        }
    }
}

fn header_err(e: io::Error) -> MalformedResponse {
    MalformedResponse::owned(format!("Unreadable response header: {e}"))
}

/// Only whole 6-byte records are read; the loop is bounded by the bytes that
/// are actually present, never by the tracker's declared counts.
#[inline]
fn parse_ipv4_peers(bytes: &[u8]) -> Result<Vec<PeerDescriptor>, MalformedResponse> {
    if bytes.len() % PEER_RECORD_SIZE != 0 {
        return Err(MalformedResponse::owned(format!(
            "Truncated peer list: {} trailing bytes",
            bytes.len() % PEER_RECORD_SIZE
        )));
    }

    let mut peers = Vec::with_capacity(bytes.len() / PEER_RECORD_SIZE);

    for chunk in bytes.chunks_exact(PEER_RECORD_SIZE) {
        let ip_bytes: [u8; 4] = chunk[..4].try_into()
            .map_err(|_| MalformedResponse::text("Invalid IPv4 address bytes"))?;

        let port = (&chunk[4..6]).read_u16::<NetworkEndian>()
            .map_err(|_| MalformedResponse::text("Invalid peer port bytes"))?;

        peers.push(PeerDescriptor {
            ip_address: Ipv4Addr::from(ip_bytes),
            port: Port(port),
        });
    }

    Ok(peers)
}
