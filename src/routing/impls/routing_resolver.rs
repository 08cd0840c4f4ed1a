use crate::config::structs::routing_resolver_config::RoutingResolverConfig;
use crate::routing::enums::routing_error::RoutingError;
use crate::routing::structs::routing_resolver::RoutingResolver;
use crate::store::store::tenant_key;
use crate::store::structs::redis_hash_store::RedisHashStore;
use crate::store::traits::hash_store::HashStore;
use log::{debug, warn};
use std::sync::Arc;

impl std::fmt::Debug for RoutingResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingResolver")
            .field("address", &self.config.store.address())
            .field("prefix", &self.config.store.prefix)
            .field("token_key", &self.config.token_key)
            .field("template", &self.template.as_str())
            .finish()
    }
}

impl RoutingResolver {
    pub async fn new(config: RoutingResolverConfig) -> Result<Self, RoutingError> {
        config.validate()?;
        let store = RedisHashStore::connect(&config.store).await?;
        Ok(Self::build(config, Arc::new(store)))
    }

    pub fn with_store(config: RoutingResolverConfig, store: Arc<dyn HashStore>) -> Result<Self, RoutingError> {
        config.validate()?;
        Ok(Self::build(config, store))
    }

    fn build(config: RoutingResolverConfig, store: Arc<dyn HashStore>) -> Self {
        if let Some(warning) = config.template_warning() {
            warn!("[CONFIG] {}", warning);
        }
        Self {
            template: config.template(),
            config,
            store,
        }
    }

    pub fn config(&self) -> &RoutingResolverConfig {
        &self.config
    }

    /// Returns the host the request should go to. An empty token keeps
    /// `incoming_host`; lookup failures are returned as-is.
    pub async fn resolve_host(&self, incoming_host: &str) -> Result<String, RoutingError> {
        let key = tenant_key(&self.config.store.prefix, incoming_host);
        let token = self.store.get_field(&key, &self.config.token_key).await?;
        if token.is_empty() {
            return Ok(incoming_host.to_string());
        }
        let effective_host = self.template.render(&token);
        debug!("[ROUTING] Replacing {} to {}", incoming_host, effective_host);
        Ok(effective_host)
    }

    pub async fn shutdown(&self) -> Result<(), RoutingError> {
        debug!("[ROUTING] Cleaning up routing resolver");
        self.store.close().await?;
        Ok(())
    }
}
