use serde::{
    Deserialize,
    Serialize
};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum CompletionPolicy {
    /// Established connections with nothing left to send stop counting as work.
    #[default]
    until_handshaken,
    /// Connections stay in the loop until the peer or an error closes them.
    until_closed,
}
