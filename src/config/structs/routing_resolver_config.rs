use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::store_config::StoreConfig;

/// `domain` has no default: a missing or empty template fails validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RoutingResolverConfig {
    #[serde(flatten)]
    pub store: StoreConfig,
    #[serde(alias = "tokenKey")]
    pub token_key: String,
    pub domain: String,
}
