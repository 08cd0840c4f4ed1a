use std::fs::File;
use std::io::Write;
use log::{info, warn};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::certificate_resolver_config::CertificateResolverConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::routing_resolver_config::RoutingResolverConfig;

const CERTIFICATE_KEYS: &[&str] = &["host", "port", "db", "prefix", "cert_key", "certKey"];
const ROUTING_KEYS: &[&str] = &["host", "port", "db", "prefix", "token_key", "tokenKey", "domain"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            certificates: Some(CertificateResolverConfig::default()),
            routing: Some(RoutingResolverConfig {
                domain: String::from("{{token}}.example.com"),
                ..RoutingResolverConfig::default()
            }),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, ConfigurationError> {
        for key in Self::unknown_keys(data)? {
            warn!("[CONFIG] Ignoring unknown key '{}'", key);
        }
        Ok(toml::from_str(&String::from_utf8_lossy(data))?)
    }

    /// Lists `section.key` names in `[certificates]` and `[routing]` that no
    /// option reads.
    pub fn unknown_keys(data: &[u8]) -> Result<Vec<String>, ConfigurationError> {
        let table: toml::Table = toml::from_str(&String::from_utf8_lossy(data))?;
        let mut unknown = Vec::new();
        for (section, known) in [("certificates", CERTIFICATE_KEYS), ("routing", ROUTING_KEYS)] {
            let Some(toml::Value::Table(entries)) = table.get(section) else {
                continue;
            };
            unknown.extend(
                entries
                    .keys()
                    .filter(|key| !known.contains(&key.as_str()))
                    .map(|key| format!("{}.{}", section, key)),
            );
        }
        Ok(unknown)
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        let config = Self::load(data.as_slice())?;
        info!("[CONFIG] Loaded configuration from {}", path);
        Ok(config)
    }

    pub fn save_file(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let data = toml::to_string(config)?;
        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        crate::logging::parse_log_level(&self.log_level)?;
        if let Some(routing) = &self.routing {
            routing.validate()?;
        }
        Ok(())
    }
}
