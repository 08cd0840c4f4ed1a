//! # Dynamic Routing
//!
//! Redis-backed, per-tenant TLS certificate selection and host routing for
//! multi-tenant HTTP front ends.
//!
//! ## Overview
//!
//! Tenant records are Redis hashes keyed `{prefix}:{hostname}`. Two resolvers
//! read them on the hot path:
//!
//! - the certificate resolver, once per TLS handshake, decodes the PEM bundle
//!   stored for the requested server name and presents it;
//! - the routing resolver, once per HTTP request, renders the tenant's token into
//!   a domain template and redirects the request to the resulting host.
//!
//! Nothing is cached: updating a tenant record takes effect on the next
//! handshake or request.
//!
//! ## Modules
//!
//! - [`bundle`] - PEM bundle splitting and key pair construction
//! - [`config`] - Resolver configuration, option parsing and TOML loading
//! - [`logging`] - Colored `fern` logger setup
//! - [`routing`] - Routing resolver and actix-web middleware
//! - [`ssl`] - Certificate resolver and SNI-aware TLS acceptor
//! - [`store`] - Redis hash store access

/// PEM bundle decoding.
///
/// Splits a bundle into its certificate chain and first private key and builds
/// a rustls certified key from them.
pub mod bundle;

/// Configuration management module.
///
/// Flat option parsing for embedding hosts and TOML loading for standalone use.
pub mod config;

/// Logger setup.
pub mod logging;

/// Per-request host routing.
pub mod routing;

/// SNI certificate resolution and the TLS acceptor built on it.
pub mod ssl;

/// Tenant record store.
pub mod store;
