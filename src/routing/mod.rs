//! Per-request host routing.
//!
//! Each request's host selects a tenant record (`{prefix}:{host}`) whose token
//! field is rendered into the configured domain template, for example
//! `{{token}}.internal.example.com`. The rendered host replaces the destination
//! host of that request only. An empty token leaves the request untouched, and
//! a failed lookup fails the request instead of forwarding it.
//!
//! [`RoutingMiddleware`](structs::routing_middleware::RoutingMiddleware) plugs
//! the resolver into an actix-web pipeline.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::App;
//! use dynamic_routing::config::structs::routing_resolver_config::RoutingResolverConfig;
//! use dynamic_routing::routing::structs::routing_middleware::RoutingMiddleware;
//! use dynamic_routing::routing::structs::routing_resolver::RoutingResolver;
//!
//! let config = RoutingResolverConfig::from_options([("domain", "{{token}}.internal.example.com")])?;
//! let resolver = Arc::new(RoutingResolver::new(config).await?);
//! let app = App::new().wrap(RoutingMiddleware::new(resolver));
//! ```

/// Error types for routing.
pub mod enums;

/// Implementation blocks for templates, the resolver and the middleware.
pub mod impls;

/// Routing data structures.
pub mod structs;
