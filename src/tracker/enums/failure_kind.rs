#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum FailureKind {
    Transport,
    ProtocolMismatch,
    ErrorPacket,
    MalformedResponse,
    Unreachable,
}
