mod common;

use std::thread;
use std::time::Duration;
use common::{PeerBehaviour, REMOTE_PEER_ID, TEST_INFO_HASH};
use torrust_swarm::config::enums::completion_policy::CompletionPolicy;
use torrust_swarm::config::structs::reactor_config::ReactorConfig;
use torrust_swarm::peer::enums::close_reason::CloseReason;
use torrust_swarm::peer::enums::peer_frame::PeerFrame;
use torrust_swarm::reactor::structs::connection_reactor::ConnectionReactor;
use torrust_swarm::reactor::structs::stop_signal::StopSignal;
use torrust_swarm::tracker::structs::info_hash::InfoHash;
use torrust_swarm::tracker::structs::peer_id::PeerId;

fn reactor(config: ReactorConfig) -> ConnectionReactor {
    ConnectionReactor::new(config, PeerId::generate(), TEST_INFO_HASH, 4).unwrap()
}

fn reactor_config() -> ReactorConfig {
    common::create_test_config().reactor
}

#[test]
fn test_handshake_with_loopback_peer() {
    let peer = common::spawn_peer(PeerBehaviour::Reply(TEST_INFO_HASH));
    let mut reactor = reactor(reactor_config());
    reactor.add_peer(peer);

    let report = reactor.run(&StopSignal::new()).unwrap();
    assert!(!report.cancelled);
    assert_eq!(report.established, vec![(peer, Some(REMOTE_PEER_ID))]);
    assert_eq!(report.closed, vec![(peer, CloseReason::Shutdown)]);
    assert_eq!(report.failed(), 0);
}

#[test]
fn test_many_peers_in_one_loop() {
    let peers: Vec<_> = (0..5).map(|_| common::spawn_peer(PeerBehaviour::Reply(TEST_INFO_HASH))).collect();
    let mut reactor = reactor(reactor_config());
    for peer in &peers {
        reactor.add_peer(*peer);
    }

    let report = reactor.run(&StopSignal::new()).unwrap();
    assert_eq!(report.established.len(), 5);
    assert_eq!(report.failed(), 0);
    assert!(reactor.is_empty());
}

#[test]
fn test_refused_connection_is_reported() {
    let peer = common::refused_peer();
    let mut reactor = reactor(reactor_config());
    reactor.add_peer(peer);

    let report = reactor.run(&StopSignal::new()).unwrap();
    assert!(report.established.is_empty());
    assert_eq!(report.closed.len(), 1);
    assert!(matches!(report.closed[0].1, CloseReason::ConnectFailed { .. } | CloseReason::Transport { .. }));
}

#[test]
fn test_silent_peer_times_out() {
    let peer = common::spawn_peer(PeerBehaviour::Silent);
    let mut config = reactor_config();
    config.handshake_timeout_secs = 0;
    let mut reactor = reactor(config);
    reactor.add_peer(peer);

    let report = reactor.run(&StopSignal::new()).unwrap();
    assert_eq!(report.closed, vec![(peer, CloseReason::HandshakeTimeout)]);
    assert_eq!(report.timed_out(), 1);
}

#[test]
fn test_wrong_info_hash_is_rejected() {
    let peer = common::spawn_peer(PeerBehaviour::Reply(InfoHash([0x11; 20])));
    let mut reactor = reactor(reactor_config());
    reactor.add_peer(peer);

    let report = reactor.run(&StopSignal::new()).unwrap();
    assert!(report.established.is_empty());
    assert_eq!(report.closed, vec![(peer, CloseReason::ProtocolMismatch {
        expected: TEST_INFO_HASH,
        received: InfoHash([0x11; 20]),
    })]);
}

#[test]
fn test_until_closed_waits_for_hang_up() {
    let peer = common::spawn_peer(PeerBehaviour::ReplyAndHangUp(TEST_INFO_HASH));
    let mut config = reactor_config();
    config.completion = CompletionPolicy::until_closed;
    let mut reactor = reactor(config);
    let handle = reactor.add_peer(peer);
    assert!(reactor.connection(handle).is_some());

    let report = reactor.run(&StopSignal::new()).unwrap();
    assert_eq!(report.established, vec![(peer, Some(REMOTE_PEER_ID))]);
    assert_eq!(report.closed, vec![(peer, CloseReason::PeerHungUp)]);
}

#[test]
fn test_stop_from_another_thread() {
    let peer = common::spawn_peer(PeerBehaviour::Silent);
    let mut config = reactor_config();
    config.handshake_timeout_secs = 60;
    let mut reactor = reactor(config);
    reactor.add_peer(peer);

    let stop = StopSignal::new();
    let trigger = stop.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(200));
        trigger.trigger();
    });

    let report = reactor.run(&stop).unwrap();
    assert!(report.cancelled);
    assert!(report.iterations > 0);
    assert_eq!(report.closed, vec![(peer, CloseReason::Cancelled)]);
}

#[test]
fn test_frames_are_handed_to_the_sink() {
    let peer = common::spawn_peer(PeerBehaviour::ReplyWithHaves(TEST_INFO_HASH, 5000));
    let mut config = reactor_config();
    config.completion = CompletionPolicy::until_closed;
    let mut reactor = reactor(config);
    let handle = reactor.add_peer(peer);

    let mut delivered = Vec::new();
    for _ in 0..400 {
        reactor.poll_once_with(Duration::from_millis(50), &mut |from, frame| delivered.push((from, frame))).unwrap();
        if delivered.len() == 5000 {
            break;
        }
    }

    assert_eq!(delivered.len(), 5000);
    assert!(delivered.iter().all(|(from, _)| *from == handle));
    assert_eq!(delivered[0].1, PeerFrame::Message { id: 4, payload: 0u32.to_be_bytes().to_vec() });
    assert_eq!(delivered[4999].1, PeerFrame::Message { id: 4, payload: 4999u32.to_be_bytes().to_vec() });

    let connection = reactor.connection_mut(handle).unwrap();
    assert!(connection.state().is_established());
    assert!(connection.take_frames().is_empty());
}

#[test]
fn test_run_with_sink_counts_frames() {
    let peer = common::spawn_peer(PeerBehaviour::ReplyAndHangUp(TEST_INFO_HASH));
    let mut config = reactor_config();
    config.completion = CompletionPolicy::until_closed;
    let mut reactor = reactor(config);
    reactor.add_peer(peer);

    let mut keep_alives = 0;
    let report = reactor.run_with(&StopSignal::new(), |_, frame| {
        if frame == PeerFrame::KeepAlive {
            keep_alives += 1;
        }
    }).unwrap();
    assert_eq!(keep_alives, 1);
    assert_eq!(report.closed, vec![(peer, CloseReason::PeerHungUp)]);
}
