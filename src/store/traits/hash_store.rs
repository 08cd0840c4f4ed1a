use crate::store::enums::store_error::StoreError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HashStore: Send + Sync {
    /// Reads one field of one record. A missing record or field is
    /// [`StoreError::FieldNotFound`]; an empty value is returned as-is.
    async fn get_field(&self, key: &str, field: &str) -> Result<String, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases the underlying connection. Calling it again is a no-op.
    async fn close(&self) -> Result<(), StoreError>;
}
