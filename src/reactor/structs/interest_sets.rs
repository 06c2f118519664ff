use std::collections::BTreeSet;
use crate::peer::structs::connection_handle::ConnectionHandle;

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct InterestSets {
    pub read: BTreeSet<ConnectionHandle>,
    pub write: BTreeSet<ConnectionHandle>,
}
