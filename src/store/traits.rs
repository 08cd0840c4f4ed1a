pub mod hash_store;
