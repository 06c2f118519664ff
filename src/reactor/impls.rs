pub mod connection_reactor;
pub mod interest_sets;
pub mod reactor_report;
pub mod stop_signal;
