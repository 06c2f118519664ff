use std::collections::{BTreeMap, BTreeSet, HashMap};
use mio::{Events, Interest, Poll};
use crate::config::structs::reactor_config::ReactorConfig;
use crate::peer::structs::connection_handle::ConnectionHandle;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::reactor::structs::reactor_report::ReactorReport;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

pub struct ConnectionReactor {
    pub(crate) poll: Poll,
    pub(crate) events: Events,
    pub(crate) connections: BTreeMap<ConnectionHandle, PeerConnection>,
    pub(crate) registered: HashMap<ConnectionHandle, Interest>,
    pub(crate) reported_established: BTreeSet<ConnectionHandle>,
    pub(crate) next_handle: usize,
    pub(crate) config: ReactorConfig,
    pub(crate) self_peer_id: PeerId,
    pub(crate) info_hash: InfoHash,
    pub(crate) num_pieces: u32,
    pub(crate) report: ReactorReport,
}
