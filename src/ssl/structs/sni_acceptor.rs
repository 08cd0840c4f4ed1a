use crate::ssl::structs::certificate_resolver::CertificateResolver;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

pub struct SniAcceptor {
    pub(crate) resolver: Arc<CertificateResolver>,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) alpn_protocols: Vec<Vec<u8>>,
}
