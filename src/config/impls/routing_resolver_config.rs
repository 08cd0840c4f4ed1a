use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::routing_resolver_config::RoutingResolverConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::routing::structs::routing_template::RoutingTemplate;

impl Default for RoutingResolverConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            token_key: "token".to_string(),
            domain: String::new(),
        }
    }
}

impl RoutingResolverConfig {
    /// Builds a validated config from flat `(name, value)` options.
    pub fn from_options<I, K, V>(options: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (name, value) in options {
            let (name, value) = (name.as_ref(), value.as_ref());
            if config.store.apply_option(name, value)? {
                continue;
            }
            match name {
                "tokenKey" => config.token_key = value.to_string(),
                "domain" => config.domain = value.to_string(),
                _ => return Err(ConfigurationError::UnknownField(name.to_string())),
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.domain.is_empty() {
            return Err(ConfigurationError::MissingField("domain"));
        }
        Ok(())
    }

    /// Describes a domain that routes every request to the same host.
    pub fn template_warning(&self) -> Option<String> {
        if self.domain.is_empty() || self.template().has_placeholder() {
            return None;
        }
        Some(format!(
            "Routing domain '{}' has no {} placeholder, every request routes to it",
            self.domain,
            RoutingTemplate::TOKEN_PLACEHOLDER
        ))
    }

    pub fn template(&self) -> RoutingTemplate {
        RoutingTemplate::new(&self.domain)
    }
}
