#![allow(dead_code)]
use std::io::{Read, Write};
use std::net::{Ipv4Addr, SocketAddr, TcpListener, UdpSocket};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use torrust_swarm::config::structs::configuration::Configuration;
use torrust_swarm::peer::structs::handshake::Handshake;
use torrust_swarm::tracker::structs::info_hash::InfoHash;
use torrust_swarm::tracker::structs::peer_id::PeerId;
use torrust_swarm::udp::enums::response::Response;
use torrust_swarm::udp::structs::announce_interval::AnnounceInterval;
use torrust_swarm::udp::structs::announce_response::AnnounceResponse;
use torrust_swarm::udp::structs::connect_response::ConnectResponse;
use torrust_swarm::udp::structs::connection_id::ConnectionId;
use torrust_swarm::udp::structs::error_response::ErrorResponse;
use torrust_swarm::udp::structs::number_of_peers::NumberOfPeers;
use torrust_swarm::udp::structs::peer_descriptor::PeerDescriptor;
use torrust_swarm::udp::structs::transaction_id::TransactionId;

pub const TEST_INFO_HASH: InfoHash = InfoHash([0x5a; 20]);
pub const REMOTE_PEER_ID: PeerId = PeerId(*b"-XX0001-remotepeer01");

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_level = String::from("off");
    config.tracker.request_timeout_ms = 500;
    config.tracker.max_attempts = 3;
    config.tracker.backoff_base_ms = 10;
    config.tracker.backoff_max_ms = 40;
    config.reactor.poll_timeout_ms = 50;
    config.reactor.handshake_timeout_secs = 5;
    config.torrent.info_hash = TEST_INFO_HASH;
    config.torrent.total_length = 1_048_576;
    config.torrent.num_pieces = 4;
    config
}

/// How the fake tracker treats incoming datagrams.
#[derive(Clone, Debug, Default)]
pub struct TrackerBehaviour {
    pub peers: Vec<PeerDescriptor>,
    /// Number of datagrams ignored before answering.
    pub drop_first: usize,
    /// Answer everything with an error packet carrying this message.
    pub error: Option<String>,
}

pub struct FakeTracker {
    pub address: SocketAddr,
    pub received: Arc<AtomicUsize>,
    running: Arc<AtomicBool>,
}

impl Drop for FakeTracker {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

fn transaction(packet: &[u8]) -> TransactionId {
    TransactionId(i32::from_be_bytes([packet[12], packet[13], packet[14], packet[15]]))
}

fn reply(behaviour: &TrackerBehaviour, packet: &[u8]) -> Option<Response> {
    if packet.len() < 16 {
        return None;
    }
    if let Some(message) = &behaviour.error {
        return Some(Response::Error(ErrorResponse {
            transaction_id: transaction(packet),
            message: message.clone().into(),
        }));
    }
    match i32::from_be_bytes([packet[8], packet[9], packet[10], packet[11]]) {
        0 => Some(Response::Connect(ConnectResponse {
            connection_id: ConnectionId(0x0bad_cafe),
            transaction_id: transaction(packet),
        })),
        1 => Some(Response::Announce(AnnounceResponse {
            transaction_id: transaction(packet),
            announce_interval: AnnounceInterval(1800),
            leechers: NumberOfPeers(0),
            seeders: NumberOfPeers(behaviour.peers.len() as i32),
            peers: behaviour.peers.clone(),
        })),
        _ => None,
    }
}

/// A UDP tracker on a loopback port, answering until dropped.
pub fn spawn_tracker(behaviour: TrackerBehaviour) -> FakeTracker {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    socket.set_read_timeout(Some(Duration::from_millis(50))).unwrap();
    let address = socket.local_addr().unwrap();
    let received = Arc::new(AtomicUsize::new(0));
    let running = Arc::new(AtomicBool::new(true));

    let thread_received = received.clone();
    let thread_running = running.clone();
    thread::spawn(move || {
        let mut buffer = [0u8; 1500];
        while thread_running.load(Ordering::SeqCst) {
            let Ok((length, from)) = socket.recv_from(&mut buffer) else {
                continue;
            };
            let seen = thread_received.fetch_add(1, Ordering::SeqCst) + 1;
            if seen <= behaviour.drop_first {
                continue;
            }
            if let Some(response) = reply(&behaviour, &buffer[..length]) {
                let _ = socket.send_to(&response.write_to_vec().unwrap(), from);
            }
        }
    });

    FakeTracker { address, received, running }
}

/// What a loopback peer does after reading our handshake.
#[derive(Clone, Copy, Debug)]
pub enum PeerBehaviour {
    /// Replies with a handshake for this info hash and keeps the socket open.
    Reply(InfoHash),
    /// Replies, sends a keep-alive and hangs up.
    ReplyAndHangUp(InfoHash),
    /// Replies, then sends this many `have` frames and keeps the socket open.
    ReplyWithHaves(InfoHash, u32),
    /// Reads the handshake and never answers.
    Silent,
}

/// A peer accepting one connection on a loopback port.
pub fn spawn_peer(behaviour: PeerBehaviour) -> PeerDescriptor {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        stream.set_read_timeout(Some(Duration::from_secs(10))).unwrap();
        let mut handshake = [0u8; 68];
        if stream.read_exact(&mut handshake).is_err() {
            return;
        }
        match behaviour {
            PeerBehaviour::Reply(info_hash) => {
                let _ = stream.write_all(&Handshake::new(info_hash, REMOTE_PEER_ID).to_bytes());
            }
            PeerBehaviour::ReplyAndHangUp(info_hash) => {
                let _ = stream.write_all(&Handshake::new(info_hash, REMOTE_PEER_ID).to_bytes());
                let _ = stream.write_all(&[0, 0, 0, 0]);
                return;
            }
            PeerBehaviour::ReplyWithHaves(info_hash, count) => {
                let mut bytes = Handshake::new(info_hash, REMOTE_PEER_ID).to_bytes().to_vec();
                for piece in 0..count {
                    bytes.extend_from_slice(&5u32.to_be_bytes());
                    bytes.push(4);
                    bytes.extend_from_slice(&piece.to_be_bytes());
                }
                let _ = stream.write_all(&bytes);
            }
            PeerBehaviour::Silent => {}
        }
        let mut sink = [0u8; 256];
        while let Ok(n) = stream.read(&mut sink) {
            if n == 0 {
                break;
            }
        }
    });

    PeerDescriptor::new(Ipv4Addr::LOCALHOST, port)
}

/// A loopback port with nothing listening on it.
pub fn refused_peer() -> PeerDescriptor {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    PeerDescriptor::new(Ipv4Addr::LOCALHOST, port)
}
