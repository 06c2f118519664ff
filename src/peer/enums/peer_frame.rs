/// Framing only; the payload is handed on untouched.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum PeerFrame {
    KeepAlive,
    Message {
        id: u8,
        payload: Vec<u8>,
    },
}
