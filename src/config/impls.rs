pub mod configuration;
pub mod store_config;
pub mod certificate_resolver_config;
pub mod routing_resolver_config;
