use crate::config::structs::certificate_resolver_config::CertificateResolverConfig;
use crate::store::traits::hash_store::HashStore;
use std::sync::Arc;

pub struct CertificateResolver {
    pub(crate) config: CertificateResolverConfig,
    pub(crate) store: Arc<dyn HashStore>,
}
