use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct ResolvedCertificate {
    pub(crate) certified_key: Arc<CertifiedKey>,
}
