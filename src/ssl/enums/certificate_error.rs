use crate::bundle::enums::bundle_error::BundleError;
use crate::store::enums::store_error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Bundle(#[from] BundleError),
    #[error("Client hello carries no server name")]
    MissingServerName,
    #[error("TLS handshake failed: {0}")]
    Handshake(String),
    #[error("TLS configuration error: {0}")]
    Tls(#[from] rustls::Error),
}
