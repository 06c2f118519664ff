mod common;

use std::net::Ipv4Addr;
use torrust_swarm::tracker::structs::tracker_session::TrackerSession;
use torrust_swarm::udp::enums::request::Request;
use torrust_swarm::udp::enums::response::Response;
use torrust_swarm::udp::structs::connect_request::ConnectRequest;
use torrust_swarm::udp::structs::peer_descriptor::PeerDescriptor;
use torrust_swarm::udp::udp::{
    decode_announce_response,
    encode_announce,
    encode_connect,
    ANNOUNCE_REQUEST_SIZE,
    PROTOCOL_IDENTIFIER
};

#[test]
fn test_connect_request_matches_request_writer() {
    let session = TrackerSession::generate();
    let packet = encode_connect(&session).unwrap();

    let written = Request::from(ConnectRequest { transaction_id: session.transaction_id }).write_to_vec().unwrap();
    assert_eq!(packet, written);
    assert_eq!(&packet[0..8], &PROTOCOL_IDENTIFIER.to_be_bytes());
}

#[test]
fn test_announce_request_carries_session_identity() {
    let session = TrackerSession::generate();
    let packet = encode_announce(&session, 512, &common::TEST_INFO_HASH).unwrap();
    assert_eq!(packet.len(), ANNOUNCE_REQUEST_SIZE);
    assert_eq!(&packet[16..36], &common::TEST_INFO_HASH.0);
    assert_eq!(&packet[36..56], &session.peer_id.0);
    assert_eq!(&packet[88..92], &session.key.0.to_be_bytes());
}

#[test]
fn test_large_peer_list_decodes() {
    let mut reply = Vec::new();
    for value in [1i32, 42, 600, 10, 190] {
        reply.extend_from_slice(&value.to_be_bytes());
    }
    let mut expected = Vec::new();
    for index in 0..200u32 {
        let peer = PeerDescriptor::new(Ipv4Addr::from(0x0a00_0000 + index), 6881 + index as u16);
        reply.extend_from_slice(&peer.ip_address.octets());
        reply.extend_from_slice(&peer.port.0.to_be_bytes());
        expected.push(peer);
    }

    match decode_announce_response(&reply).unwrap() {
        Response::Announce(response) => assert_eq!(response.peers, expected),
        other => panic!("Expected Announce, got {:?}", other),
    }
}

#[test]
fn test_malformed_packets_never_panic() {
    for length in 0..40usize {
        let packet: Vec<u8> = (0..length).map(|i| (i * 37) as u8).collect();
        let _ = Response::from_bytes(&packet);
        let _ = decode_announce_response(&packet);
    }
}
