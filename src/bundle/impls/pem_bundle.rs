use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::pem_bundle::PemBundle;
use rustls::sign::CertifiedKey;

impl std::fmt::Debug for PemBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemBundle")
            .field("certificate_chain_len", &self.certificate_chain.len())
            .field("private_key_len", &self.private_key.len())
            .finish()
    }
}

impl PemBundle {
    /// Parses both PEM streams and pairs them into a rustls certified key.
    ///
    /// Fails when either stream does not hold valid DER, when the key encoding is
    /// not supported by the ring provider, or when the leaf certificate's public
    /// key does not match the private key.
    pub fn into_certified_key(self) -> Result<CertifiedKey, BundleError> {
        let mut chain_reader = self.certificate_chain.as_slice();
        let certs = rustls_pemfile::certs(&mut chain_reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| BundleError::KeyPair(e.to_string()))?;
        if certs.is_empty() {
            return Err(BundleError::KeyPair("no certificates in chain".to_string()));
        }

        let mut key_reader = self.private_key.as_slice();
        let key = rustls_pemfile::private_key(&mut key_reader)
            .map_err(|e| BundleError::KeyPair(e.to_string()))?
            .ok_or_else(|| BundleError::KeyPair("unsupported private key encoding".to_string()))?;

        let provider = rustls::crypto::ring::default_provider();
        CertifiedKey::from_der(certs, key, &provider)
            .map_err(|e| BundleError::KeyPair(e.to_string()))
    }
}
