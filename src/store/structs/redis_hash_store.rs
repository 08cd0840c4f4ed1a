use parking_lot::RwLock;
use redis::aio::ConnectionManager;

pub struct RedisHashStore {
    pub(crate) connection: RwLock<Option<ConnectionManager>>,
    pub(crate) address: String,
    pub(crate) db: i64,
}
