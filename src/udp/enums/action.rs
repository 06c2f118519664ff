/// The `action` field shared by every request and response header.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Action {
    Connect = 0,
    Announce = 1,
    Error = 3,
}
