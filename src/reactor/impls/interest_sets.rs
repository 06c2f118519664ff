use mio::Interest;
use crate::config::enums::completion_policy::CompletionPolicy;
use crate::peer::structs::connection_handle::ConnectionHandle;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::peer::traits::peer_transport::PeerTransport;
use crate::reactor::structs::interest_sets::InterestSets;

impl InterestSets {
    /// Read interest: every connection that is not closed, minus established
    /// and idle ones when the policy retires them. Write interest: every
    /// connection with bytes waiting in its outbound buffer.
    pub fn compute<'a, S, I>(connections: I, policy: CompletionPolicy) -> InterestSets
    where
        S: PeerTransport + 'a,
        I: IntoIterator<Item = &'a PeerConnection<S>>,
    {
        let mut sets = InterestSets::default();
        for connection in connections {
            if connection.is_closed() {
                continue;
            }
            let pending_output = connection.has_pending_output();
            let retired = policy.retires_established() && connection.state().is_established() && !pending_output;
            if !retired {
                sets.read.insert(connection.handle());
            }
            if pending_output {
                sets.write.insert(connection.handle());
            }
        }
        sets
    }

    pub fn is_empty(&self) -> bool {
        self.read.is_empty() && self.write.is_empty()
    }

    pub fn interest_for(&self, handle: ConnectionHandle) -> Option<Interest> {
        match (self.read.contains(&handle), self.write.contains(&handle)) {
            (true, true) => Some(Interest::READABLE | Interest::WRITABLE),
            (true, false) => Some(Interest::READABLE),
            (false, true) => Some(Interest::WRITABLE),
            (false, false) => None,
        }
    }
}
