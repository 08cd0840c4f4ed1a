//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure.
pub mod configuration;

/// Redis connection settings shared by both resolvers.
pub mod store_config;

/// SNI certificate resolver settings.
pub mod certificate_resolver_config;

/// Host routing resolver settings.
pub mod routing_resolver_config;
