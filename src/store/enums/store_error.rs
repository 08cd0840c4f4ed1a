use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("no such field: {field} in {key}")]
    FieldNotFound { key: String, field: String },

    #[error("Store connection closed")]
    Closed,

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
