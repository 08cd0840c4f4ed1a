//! Store connector structures.

/// Redis-backed hash store.
pub mod redis_hash_store;
