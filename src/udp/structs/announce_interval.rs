/// Seconds the tracker asks us to wait before announcing again.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct AnnounceInterval(pub i32);
