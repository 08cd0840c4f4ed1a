use crate::config::structs::store_config::StoreConfig;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::redis_hash_store::RedisHashStore;
use crate::store::traits::hash_store::HashStore;
use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;
use redis::aio::ConnectionManager;

impl std::fmt::Debug for RedisHashStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisHashStore")
            .field("address", &self.address())
            .field("db", &self.db)
            .field("connected", &self.connection.read().is_some())
            .finish()
    }
}

impl RedisHashStore {
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = redis::Client::open(config.connection_url())
            .map_err(|e| StoreError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        let store = Self {
            connection: RwLock::new(Some(connection)),
            address: config.address(),
            db: config.db,
        };
        store.ping().await?;
        info!("[STORE] Connected to Redis at {} (db {})", store.address(), store.db);
        Ok(store)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn handle(&self) -> Result<ConnectionManager, StoreError> {
        self.connection.read().clone().ok_or(StoreError::Closed)
    }
}

#[async_trait]
impl HashStore for RedisHashStore {
    async fn get_field(&self, key: &str, field: &str) -> Result<String, StoreError> {
        let mut conn = self.handle()?;
        let value: Option<String> = redis::cmd("HGET")
            .arg(key)
            .arg(field)
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        value.ok_or_else(|| StoreError::FieldNotFound {
            key: key.to_string(),
            field: field.to_string(),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.handle()?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        let released = self.connection.write().take();
        match released {
            Some(_) => debug!("[STORE] Released connection to {}", self.address()),
            None => debug!("[STORE] Connection to {} already released", self.address()),
        }
        Ok(())
    }
}
