/// Store-backed certificate lookup.
pub mod certificate_resolver;

/// Fixed-key `ResolvesServerCert` used for a single handshake.
pub mod resolved_certificate;

/// Async TLS acceptor selecting the certificate by SNI.
pub mod sni_acceptor;
