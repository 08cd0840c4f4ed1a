use crate::config::structs::routing_resolver_config::RoutingResolverConfig;
use crate::routing::structs::routing_template::RoutingTemplate;
use crate::store::traits::hash_store::HashStore;
use std::sync::Arc;

pub struct RoutingResolver {
    pub(crate) config: RoutingResolverConfig,
    pub(crate) template: RoutingTemplate,
    pub(crate) store: Arc<dyn HashStore>,
}
