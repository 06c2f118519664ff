#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceUrl {
    pub host: String,
    pub port: u16,
    /// Everything after the authority, `/announce` style. Not sent over UDP.
    pub path: String,
}
