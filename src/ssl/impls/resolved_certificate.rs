use crate::ssl::structs::resolved_certificate::ResolvedCertificate;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for ResolvedCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedCertificate")
            .field("chain_length", &self.certified_key.cert.len())
            .finish()
    }
}

impl ResolvedCertificate {
    pub fn new(certified_key: Arc<CertifiedKey>) -> Self {
        Self { certified_key }
    }
}

impl ResolvesServerCert for ResolvedCertificate {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        Some(self.certified_key.clone())
    }
}
