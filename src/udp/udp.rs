use std::io;
use crate::tracker::structs::announce_params::AnnounceParams;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracker_session::TrackerSession;
use crate::udp::enums::action::Action;
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::malformed_response::MalformedResponse;
use crate::udp::structs::number_of_bytes::NumberOfBytes;

/// `0x41727101980`, sent as the connection id of every connect request.
pub const PROTOCOL_IDENTIFIER: i64 = 4_497_486_125_440;
pub const CONNECT_REQUEST_SIZE: usize = 16;
pub const ANNOUNCE_REQUEST_SIZE: usize = 98;
pub const CONNECT_RESPONSE_SIZE: usize = 16;
pub const ANNOUNCE_RESPONSE_HEADER_SIZE: usize = 20;
pub const ERROR_RESPONSE_HEADER_SIZE: usize = 8;
pub const PEER_RECORD_SIZE: usize = 6;
/// Largest UDP payload over IPv4; replies are read into a buffer this size.
pub const MAX_PACKET_SIZE: usize = 65_507;

pub fn encode_connect(session: &TrackerSession) -> Result<Vec<u8>, io::Error> {
    Request::from(ConnectRequest {
        transaction_id: session.transaction_id,
    }).write_to_vec()
}

/// Initial announce: nothing downloaded yet, so `left` is the whole torrent.
pub fn encode_announce(session: &TrackerSession, total_length: u64, info_hash: &InfoHash) -> Result<Vec<u8>, io::Error> {
    encode_announce_with(session, total_length, info_hash, &AnnounceParams::default())
}

pub fn encode_announce_with(session: &TrackerSession, total_length: u64, info_hash: &InfoHash, params: &AnnounceParams) -> Result<Vec<u8>, io::Error> {
    let left = total_length.saturating_sub(params.downloaded);

    Request::from(AnnounceRequest {
        connection_id: session.connection_id,
        transaction_id: session.transaction_id,
        info_hash: *info_hash,
        peer_id: session.peer_id,
        bytes_downloaded: NumberOfBytes(clamp_i64(params.downloaded)),
        bytes_left: NumberOfBytes(clamp_i64(left)),
        bytes_uploaded: NumberOfBytes(clamp_i64(params.uploaded)),
        event: params.event,
        ip_address: params.ip_address,
        key: session.key,
        peers_wanted: params.num_want,
        port: params.port,
    }).write_to_vec()
}

/// Yields either [`Response::Connect`] or [`Response::Error`].
pub fn decode_connect_response(bytes: &[u8]) -> Result<Response, MalformedResponse> {
    expect_action(Response::from_bytes(bytes)?, Action::Connect)
}

/// Yields either [`Response::Announce`] or [`Response::Error`].
pub fn decode_announce_response(bytes: &[u8]) -> Result<Response, MalformedResponse> {
    expect_action(Response::from_bytes(bytes)?, Action::Announce)
}

pub fn decode_error_packet(bytes: &[u8]) -> Result<ErrorResponse, MalformedResponse> {
    match Response::from_bytes(bytes)? {
        Response::Error(r) => Ok(r),
        other => Err(MalformedResponse::owned(format!("Expected an error packet, got action {}", other.action()))),
    }
}

fn expect_action(response: Response, expected: Action) -> Result<Response, MalformedResponse> {
    let action = response.action();
    if action == expected || action == Action::Error {
        Ok(response)
    } else {
        Err(MalformedResponse::owned(format!("Expected action {expected} or error, got {action}")))
    }
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
