use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::store_config::StoreConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CertificateResolverConfig {
    #[serde(flatten)]
    pub store: StoreConfig,
    #[serde(alias = "certKey")]
    pub cert_key: String,
}
