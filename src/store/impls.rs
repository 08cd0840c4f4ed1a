pub mod redis_hash_store;
