#![allow(dead_code)]
use async_trait::async_trait;
use dynamic_routing::store::enums::store_error::StoreError;
use dynamic_routing::store::traits::hash_store::HashStore;
use parking_lot::RwLock;
use rcgen::{generate_simple_self_signed, CertifiedKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub const RSA_CERT: &str = include_str!("../fixtures/rsa_cert.pem");
pub const RSA_KEY: &str = include_str!("../fixtures/rsa_pkcs8.pem");
pub const RSA_KEY_PKCS1: &str = include_str!("../fixtures/rsa_pkcs1.pem");
pub const RSA_INTERMEDIATE: &str = include_str!("../fixtures/rsa_intermediate.pem");
pub const EC_CERT: &str = include_str!("../fixtures/ec_cert.pem");
pub const EC_KEY_WITH_PARAMS: &str = include_str!("../fixtures/ec_key_with_params.pem");
pub const OTHER_RSA_KEY: &str = include_str!("../fixtures/other_rsa_pkcs8.pem");

/// In-memory stand-in for the Redis hash store.
#[derive(Default)]
pub struct MemoryHashStore {
    records: RwLock<HashMap<String, HashMap<String, String>>>,
    unreachable: AtomicBool,
    closed: AtomicBool,
    lookups: AtomicUsize,
    closes: AtomicUsize,
}

impl MemoryHashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(self, key: &str, field: &str, value: &str) -> Self {
        self.set_field(key, field, value);
        self
    }

    pub fn set_field(&self, key: &str, field: &str, value: &str) {
        self.records
            .write()
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HashStore for MemoryHashStore {
    async fn get_field(&self, key: &str, field: &str) -> Result<String, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Closed);
        }
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::ConnectionError("connection refused".to_string()));
        }
        self.records
            .read()
            .get(key)
            .and_then(|record| record.get(field))
            .cloned()
            .ok_or_else(|| StoreError::FieldNotFound {
                key: key.to_string(),
                field: field.to_string(),
            })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

pub fn bundle(blocks: &[&str]) -> String {
    blocks.concat()
}

pub fn rsa_bundle() -> String {
    bundle(&[RSA_CERT, RSA_KEY])
}

pub fn ec_bundle() -> String {
    bundle(&[EC_KEY_WITH_PARAMS, EC_CERT])
}

/// Self-signed certificate and key for `hostname`, as PEM bundle text.
pub fn generated_bundle(hostname: &str) -> String {
    let CertifiedKey { cert, signing_key: key_pair } = generate_simple_self_signed(vec![hostname.to_string()]).unwrap();
    format!("{}{}", cert.pem(), key_pair.serialize_pem())
}

pub fn certificate_der(pem: &str) -> Vec<u8> {
    let mut reader = pem.as_bytes();
    rustls_pemfile::certs(&mut reader)
        .next()
        .unwrap()
        .unwrap()
        .to_vec()
}
