use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    pub(crate) flag: Arc<AtomicBool>,
}
