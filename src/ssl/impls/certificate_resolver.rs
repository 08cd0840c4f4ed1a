use crate::bundle::bundle::decode_bundle;
use crate::config::structs::certificate_resolver_config::CertificateResolverConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_resolver::CertificateResolver;
use crate::store::store::tenant_key;
use crate::store::structs::redis_hash_store::RedisHashStore;
use crate::store::traits::hash_store::HashStore;
use log::debug;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for CertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateResolver")
            .field("address", &self.config.store.address())
            .field("prefix", &self.config.store.prefix)
            .field("cert_key", &self.config.cert_key)
            .finish()
    }
}

impl CertificateResolver {
    pub async fn new(config: CertificateResolverConfig) -> Result<Self, CertificateError> {
        let store = RedisHashStore::connect(&config.store).await?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: CertificateResolverConfig, store: Arc<dyn HashStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &CertificateResolverConfig {
        &self.config
    }

    /// Fetches and decodes the bundle stored for `server_name`. The name is used
    /// verbatim in the record key.
    pub async fn resolve_certificate(&self, server_name: &str) -> Result<Arc<CertifiedKey>, CertificateError> {
        debug!("[CERTIFICATE] SNI: {}", server_name);
        let key = tenant_key(&self.config.store.prefix, server_name);
        let bundle = self.store.get_field(&key, &self.config.cert_key).await?;
        let certified_key = decode_bundle(bundle.as_bytes())?;
        Ok(Arc::new(certified_key))
    }

    pub async fn shutdown(&self) -> Result<(), CertificateError> {
        debug!("[CERTIFICATE] Cleaning up certificate resolver");
        self.store.close().await?;
        Ok(())
    }
}
