#[cfg(test)]
mod udp_tests {
    use std::net::Ipv4Addr;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::announce_params::AnnounceParams;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::tracker_session::TrackerSession;
    use crate::udp::enums::response::Response;
    use crate::udp::structs::connection_id::ConnectionId;
    use crate::udp::structs::number_of_peers::NumberOfPeers;
    use crate::udp::structs::peer_descriptor::PeerDescriptor;
    use crate::udp::structs::peer_key::PeerKey;
    use crate::udp::structs::port::Port;
    use crate::udp::structs::transaction_id::TransactionId;
    use crate::udp::udp::{
        decode_announce_response,
        decode_connect_response,
        decode_error_packet,
        encode_announce,
        encode_announce_with,
        encode_connect,
        ANNOUNCE_REQUEST_SIZE,
        CONNECT_REQUEST_SIZE,
        PROTOCOL_IDENTIFIER
    };

    fn session() -> TrackerSession {
        TrackerSession {
            connection_id: ConnectionId(0x0102_0304_0506_0708),
            transaction_id: TransactionId(0x1234_5678),
            peer_id: PeerId(*b"-TS0100-abcdefghijkl"),
            key: PeerKey(0x0a0b_0c0d),
            connected_at: None,
        }
    }

    fn announce_header(transaction_id: i32, interval: i32, leechers: i32, seeders: i32) -> Vec<u8> {
        let mut bytes = Vec::new();
        for value in [1, transaction_id, interval, leechers, seeders] {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    fn peer_record(ip: [u8; 4], port: u16) -> Vec<u8> {
        let mut bytes = ip.to_vec();
        bytes.extend_from_slice(&port.to_be_bytes());
        bytes
    }

    #[test]
    fn test_protocol_identifier_constant() {
        assert_eq!(PROTOCOL_IDENTIFIER, 0x41727101980);
    }

    #[test]
    fn test_encode_connect_layout() {
        let packet = encode_connect(&session()).unwrap();
        assert_eq!(packet.len(), CONNECT_REQUEST_SIZE);
        assert_eq!(&packet[0..8], &PROTOCOL_IDENTIFIER.to_be_bytes());
        assert_eq!(&packet[8..12], &0i32.to_be_bytes());
        assert_eq!(&packet[12..16], &0x1234_5678i32.to_be_bytes());
    }

    #[test]
    fn test_encode_announce_layout() {
        let info_hash = InfoHash([0xaa; 20]);
        let packet = encode_announce(&session(), 1_000_000, &info_hash).unwrap();
        assert_eq!(packet.len(), ANNOUNCE_REQUEST_SIZE);
        assert_eq!(&packet[0..8], &0x0102_0304_0506_0708i64.to_be_bytes());
        assert_eq!(&packet[8..12], &1i32.to_be_bytes());
        assert_eq!(&packet[12..16], &0x1234_5678i32.to_be_bytes());
        assert_eq!(&packet[16..36], &[0xaa; 20]);
        assert_eq!(&packet[36..56], b"-TS0100-abcdefghijkl");
        assert_eq!(&packet[56..64], &0i64.to_be_bytes());
        assert_eq!(&packet[64..72], &1_000_000i64.to_be_bytes());
        assert_eq!(&packet[72..80], &0i64.to_be_bytes());
        assert_eq!(&packet[80..84], &0i32.to_be_bytes());
        assert_eq!(&packet[84..88], &0u32.to_be_bytes());
        assert_eq!(&packet[88..92], &0x0a0b_0c0du32.to_be_bytes());
        assert_eq!(&packet[92..96], &(-1i32).to_be_bytes());
        assert_eq!(&packet[96..98], &6881u16.to_be_bytes());
    }

    #[test]
    fn test_encode_announce_with_params() {
        let params = AnnounceParams {
            downloaded: 400,
            uploaded: 50,
            event: AnnounceEvent::Started,
            ip_address: Some(Ipv4Addr::new(192, 168, 1, 2)),
            num_want: NumberOfPeers(30),
            port: Port(51413),
        };
        let packet = encode_announce_with(&session(), 1000, &InfoHash([0; 20]), &params).unwrap();
        assert_eq!(&packet[56..64], &400i64.to_be_bytes());
        assert_eq!(&packet[64..72], &600i64.to_be_bytes());
        assert_eq!(&packet[72..80], &50i64.to_be_bytes());
        assert_eq!(&packet[80..84], &2i32.to_be_bytes());
        assert_eq!(&packet[84..88], &[192, 168, 1, 2]);
        assert_eq!(&packet[92..96], &30i32.to_be_bytes());
        assert_eq!(&packet[96..98], &51413u16.to_be_bytes());
    }

    #[test]
    fn test_left_never_underflows() {
        let params = AnnounceParams {
            downloaded: 5000,
            ..AnnounceParams::default()
        };
        let packet = encode_announce_with(&session(), 1000, &InfoHash([0; 20]), &params).unwrap();
        assert_eq!(&packet[64..72], &0i64.to_be_bytes());
    }

    #[test]
    fn test_connect_response_recovers_connection_id() {
        let request = encode_connect(&session()).unwrap();
        let mut reply = Vec::new();
        reply.extend_from_slice(&0i32.to_be_bytes());
        reply.extend_from_slice(&request[12..16]);
        reply.extend_from_slice(&0x7766_5544_3322_1100i64.to_be_bytes());

        match decode_connect_response(&reply).unwrap() {
            Response::Connect(r) => {
                assert_eq!(r.transaction_id, session().transaction_id);
                assert_eq!(r.connection_id, ConnectionId(0x7766_5544_3322_1100));
            }
            other => panic!("Expected Connect, got {:?}", other),
        }
    }

    #[test]
    fn test_connect_response_too_short() {
        let mut reply = Vec::new();
        reply.extend_from_slice(&0i32.to_be_bytes());
        reply.extend_from_slice(&5i32.to_be_bytes());
        reply.extend_from_slice(&[0u8; 7]);
        assert!(decode_connect_response(&reply).is_err());
    }

    #[test]
    fn test_connect_decoder_rejects_announce_action() {
        let reply = announce_header(5, 1800, 0, 0);
        assert!(decode_connect_response(&reply).is_err());
    }

    #[test]
    fn test_announce_response_three_peers_in_order() {
        let mut reply = announce_header(77, 1800, 2, 3);
        reply.extend(peer_record([127, 0, 0, 1], 6881));
        reply.extend(peer_record([10, 0, 0, 1], 51413));
        reply.extend(peer_record([8, 8, 8, 8], 6969));

        match decode_announce_response(&reply).unwrap() {
            Response::Announce(r) => {
                assert_eq!(r.transaction_id, TransactionId(77));
                assert_eq!(r.announce_interval.0, 1800);
                assert_eq!(r.leechers, NumberOfPeers(2));
                assert_eq!(r.seeders, NumberOfPeers(3));
                assert_eq!(r.peers, vec![
                    PeerDescriptor::new(Ipv4Addr::new(127, 0, 0, 1), 6881),
                    PeerDescriptor::new(Ipv4Addr::new(10, 0, 0, 1), 51413),
                    PeerDescriptor::new(Ipv4Addr::new(8, 8, 8, 8), 6969),
                ]);
            }
            other => panic!("Expected Announce, got {:?}", other),
        }
    }

    #[test]
    fn test_announce_response_shorter_than_header() {
        let reply = announce_header(77, 1800, 2, 3);
        assert!(decode_announce_response(&reply[..19]).is_err());
    }

    #[test]
    fn test_announce_response_truncated_peer_record() {
        let mut reply = announce_header(77, 1800, 0, 2);
        reply.extend(peer_record([1, 2, 3, 4], 1000));
        reply.extend_from_slice(&[5, 6, 7]);
        let error = decode_announce_response(&reply).unwrap_err();
        assert!(error.reason.contains("Truncated"));
    }

    #[test]
    fn test_announce_response_bounded_by_records_present() {
        let mut reply = announce_header(1, 1800, 0, 50);
        reply.extend(peer_record([1, 2, 3, 4], 1000));
        match decode_announce_response(&reply).unwrap() {
            Response::Announce(r) => assert_eq!(r.peers.len(), 1),
            other => panic!("Expected Announce, got {:?}", other),
        }
    }

    #[test]
    fn test_announce_decoder_passes_error_packets() {
        let mut reply = Vec::new();
        reply.extend_from_slice(&3i32.to_be_bytes());
        reply.extend_from_slice(&9i32.to_be_bytes());
        reply.extend_from_slice(b"unregistered torrent");
        assert!(matches!(decode_announce_response(&reply), Ok(Response::Error(_))));

        let error = decode_error_packet(&reply).unwrap();
        assert_eq!(error.transaction_id, TransactionId(9));
        assert_eq!(error.message, "unregistered torrent");
    }

    #[test]
    fn test_error_packet_with_empty_message() {
        let mut reply = Vec::new();
        reply.extend_from_slice(&3i32.to_be_bytes());
        reply.extend_from_slice(&9i32.to_be_bytes());
        let error = decode_error_packet(&reply).unwrap();
        assert_eq!(error.message, "");
    }

    #[test]
    fn test_unknown_action_is_malformed() {
        let mut reply = Vec::new();
        reply.extend_from_slice(&2i32.to_be_bytes());
        reply.extend_from_slice(&[0u8; 12]);
        assert!(Response::from_bytes(&reply).is_err());
        assert!(decode_error_packet(&reply).is_err());
    }

    #[test]
    fn test_empty_packet_never_panics() {
        assert!(Response::from_bytes(&[]).is_err());
        assert!(decode_connect_response(&[0u8; 3]).is_err());
        assert!(decode_announce_response(&[1u8]).is_err());
    }
}
