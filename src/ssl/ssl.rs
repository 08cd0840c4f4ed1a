use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::resolved_certificate::ResolvedCertificate;
use rustls::crypto::CryptoProvider;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub fn create_server_config_with_key(
    provider: Arc<CryptoProvider>,
    certified_key: Arc<CertifiedKey>,
) -> Result<rustls::ServerConfig, CertificateError> {
    Ok(rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(Arc::new(ResolvedCertificate::new(certified_key))))
}
