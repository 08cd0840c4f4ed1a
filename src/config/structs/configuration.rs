use serde::{Deserialize, Serialize};
use crate::config::structs::certificate_resolver_config::CertificateResolverConfig;
use crate::config::structs::routing_resolver_config::RoutingResolverConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    pub certificates: Option<CertificateResolverConfig>,
    pub routing: Option<RoutingResolverConfig>,
}
