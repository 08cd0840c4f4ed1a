pub mod pem_block;
pub mod pem_bundle;
pub mod pem_reader;
