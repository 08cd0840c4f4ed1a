use std::str::FromStr;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::store_config::StoreConfig;

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            db: 0,
            prefix: "s".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connection_url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }

    /// Applies one of the shared connection options. Returns `false` when the
    /// name belongs to none of them, so the caller can try its own fields.
    pub(crate) fn apply_option(&mut self, name: &str, value: &str) -> Result<bool, ConfigurationError> {
        match name {
            "host" => self.host = value.to_string(),
            "port" => self.port = parse_number(name, value)?,
            "db" => self.db = parse_number(name, value)?,
            "prefix" => self.prefix = value.to_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_number<T: FromStr>(field: &str, value: &str) -> Result<T, ConfigurationError> {
    value.trim().parse::<T>().map_err(|_| ConfigurationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}
