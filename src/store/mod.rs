//! Tenant record store.
//!
//! Tenant records live in Redis hashes addressed as `{prefix}:{hostname}`. The
//! resolvers only ever read one field of one record per call, so the store
//! surface is a single `HGET`-shaped lookup behind the [`HashStore`] trait.
//!
//! [`HashStore`]: traits::hash_store::HashStore
//!
//! # Connection lifecycle
//!
//! Each resolver owns one [`RedisHashStore`], connected at provisioning. The
//! handle is a cloneable multiplexed connection: every lookup clones it and
//! awaits on its own, so concurrent lookups never wait on each other inside this
//! crate. `close` drops the handle once; lookups already holding a clone finish
//! normally, later lookups fail with [`StoreError::Closed`].
//!
//! [`RedisHashStore`]: structs::redis_hash_store::RedisHashStore
//! [`StoreError::Closed`]: enums::store_error::StoreError::Closed

/// Error types for store operations.
pub mod enums;

/// Implementation blocks for store connectors.
pub mod impls;

/// Key helpers.
#[allow(clippy::module_inception)]
pub mod store;

/// Data structures for store connections.
pub mod structs;

/// Store backend trait definitions.
pub mod traits;
