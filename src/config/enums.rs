/// Retry delay schedule selectable from the config file.
pub mod backoff_kind;

/// When the reactor considers a connection finished.
pub mod completion_policy;

/// Errors raised while loading, saving or validating configuration.
pub mod configuration_error;
