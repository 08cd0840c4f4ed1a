use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::certificate_resolver_config::CertificateResolverConfig;
use crate::config::structs::store_config::StoreConfig;

impl Default for CertificateResolverConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            cert_key: "cert".to_string(),
        }
    }
}

impl CertificateResolverConfig {
    /// Builds a config from flat `(name, value)` options, starting from the
    /// defaults. The first unrecognized name is rejected.
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
                "certKey" => config.cert_key = value.to_string(),
                _ => return Err(ConfigurationError::UnknownField(name.to_string())),
            }
        }
        Ok(config)
    }
}
