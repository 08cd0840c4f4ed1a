use crate::config::enums::configuration_error::ConfigurationError;
use crate::store::enums::store_error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("Invalid effective host: {0}")]
    InvalidHost(String),
}
