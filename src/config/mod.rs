//! Configuration management module.
//!
//! Resolver settings come in two shapes. Embedding hosts hand over a flat list of
//! `(name, value)` options, parsed by `from_options` on each resolver config.
//! Standalone deployments load a TOML file into [`structs::configuration::Configuration`].
//!
//! # Configuration Structure
//!
//! - **log_level**: Logging verbosity (`off`, `trace`, `debug`, `info`, `warn`, `error`)
//! - **certificates**: Optional SNI certificate resolver (store connection plus `cert_key`)
//! - **routing**: Optional host routing resolver (store connection, `token_key`, `domain`)
//!
//! # Example
//!
//! ```rust,ignore
//! use dynamic_routing::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for option parsing and file loading/saving.
pub mod impls;
