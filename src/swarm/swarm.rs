use std::net::{SocketAddr, ToSocketAddrs};
use log::{debug, info, warn};
use crate::config::structs::configuration::Configuration;
use crate::metainfo::traits::metainfo_provider::MetainfoProvider;
use crate::reactor::structs::connection_reactor::ConnectionReactor;
use crate::reactor::structs::reactor_report::ReactorReport;
use crate::reactor::structs::stop_signal::StopSignal;
use crate::swarm::enums::swarm_error::SwarmError;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::tracker_client::TrackerClient;
use crate::tracker::traits::tracker_transport::TrackerTransport;

/// First IPv4 address `host` resolves to.
pub fn resolve_ipv4_endpoint(host: &str, port: u16) -> Result<SocketAddr, SwarmError> {
    let mut addresses = (host, port).to_socket_addrs().map_err(|source| SwarmError::Resolve {
        host: host.to_string(),
        source,
    })?;
    addresses
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| SwarmError::Tracker(TrackerError::NoIpv4Endpoint(format!("{host}:{port}"))))
}

/// Discovers peers over UDP and handshakes with them.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_swarm(config: &Configuration, metainfo: &dyn MetainfoProvider, stop: StopSignal) -> Result<ReactorReport, SwarmError> {
    let (host, port) = metainfo.announce_endpoint();
    let endpoint = resolve_ipv4_endpoint(&host, port)?;
    info!("[SWARM] Tracker {host}:{port} resolved to {endpoint}");

    let mut client = TrackerClient::new(&config.tracker);
    run_swarm_with(config, metainfo, &mut client, endpoint, stop)
}

/// Same as [`run_swarm`] with an already resolved endpoint and a caller
/// supplied client.
pub fn run_swarm_with<T: TrackerTransport>(
    config: &Configuration,
    metainfo: &dyn MetainfoProvider,
    client: &mut TrackerClient<T>,
    endpoint: SocketAddr,
    stop: StopSignal,
) -> Result<ReactorReport, SwarmError> {
    let timeout = config.tracker.request_timeout();
    let info_hash = metainfo.info_hash();

    client.connect(endpoint, timeout)?;
    let announce = client.announce(endpoint, metainfo.total_length(), &info_hash, timeout)?;
    let mut reactor = ConnectionReactor::new(config.reactor.clone(), client.session().peer_id, info_hash, metainfo.num_pieces())
        .map_err(SwarmError::Reactor)?;

    let usable: Vec<_> = announce.peers.iter()
        .filter(|descriptor| {
            let usable = descriptor.port.0 != 0 && !descriptor.ip_address.is_unspecified();
            if !usable {
                debug!("[SWARM] Skipping unusable peer {descriptor}");
            }
            usable
        })
        .copied()
        .collect();
    if usable.len() > config.reactor.max_peers {
        warn!("[SWARM] Tracker returned {} usable peers, only dialing {}", usable.len(), config.reactor.max_peers);
    }
    debug!("[SWARM] Dialing {} of {} peers", usable.len().min(config.reactor.max_peers), announce.peers.len());
    for descriptor in usable.into_iter().take(config.reactor.max_peers) {
        reactor.add_peer(descriptor);
    }

    let report = reactor.run(&stop).map_err(SwarmError::Reactor)?;
    info!("[SWARM] {report}");
    Ok(report)
}
