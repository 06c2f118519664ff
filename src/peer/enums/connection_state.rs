#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum ConnectionState {
    #[default]
    Connecting,
    HandshakeStaged,
    HandshakeInFlight,
    Established,
    Closed,
}
