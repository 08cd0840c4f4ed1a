pub mod certificate_resolver;
pub mod resolved_certificate;
pub mod sni_acceptor;
