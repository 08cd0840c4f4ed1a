//! Configuration enumerations.

/// Errors raised while parsing, validating or persisting configuration.
pub mod configuration_error;
