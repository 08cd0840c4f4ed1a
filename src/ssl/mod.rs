//! SNI certificate resolution.
//!
//! Certificates are not loaded from disk. For every TLS handshake the server
//! name sent by the client selects a tenant record (`{prefix}:{server_name}`),
//! whose bundle field holds the PEM certificate chain and private key. The
//! bundle is decoded into a fresh [`CertifiedKey`](rustls::sign::CertifiedKey)
//! and presented for that handshake only. Nothing is cached.
//!
//! rustls asks for certificates synchronously, while the lookup is async. The
//! [`SniAcceptor`](structs::sni_acceptor::SniAcceptor) bridges the two: it reads
//! the ClientHello with `tokio_rustls::LazyConfigAcceptor`, awaits the lookup,
//! then finishes the handshake with a config built around the resolved key.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dynamic_routing::config::structs::certificate_resolver_config::CertificateResolverConfig;
//! use dynamic_routing::ssl::structs::certificate_resolver::CertificateResolver;
//! use dynamic_routing::ssl::structs::sni_acceptor::SniAcceptor;
//!
//! let resolver = CertificateResolver::new(CertificateResolverConfig::default()).await?;
//! let acceptor = SniAcceptor::new(Arc::new(resolver));
//! let tls_stream = acceptor.accept(tcp_stream).await?;
//! ```

/// Error types for certificate resolution.
pub mod enums;

/// Implementation blocks for the resolver and the acceptor.
pub mod impls;

/// Server config helpers.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Resolver and acceptor structures.
pub mod structs;

#[cfg(test)]
mod tests;
