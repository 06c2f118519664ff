pub mod completion_policy;
pub mod configuration;
pub mod configuration_error;
pub mod reactor_config;
pub mod tracker_config;
