//! PEM bundle decoding.
//!
//! A bundle is a single blob holding a certificate chain and one private key as
//! concatenated PEM blocks, in any order. This module splits such a blob into a
//! certificate chain and a private key, then turns both into a rustls
//! [`CertifiedKey`](rustls::sign::CertifiedKey) whose leaf certificate is checked
//! against the key.
//!
//! # Recognized blocks
//!
//! - `CERTIFICATE`: appended to the chain in encounter order
//! - `EC PARAMETERS`: must be immediately followed by `EC PRIVATE KEY`
//! - `PRIVATE KEY` or any label ending in ` PRIVATE KEY`
//!
//! Any other label fails the whole bundle. Only the first key is used.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynamic_routing::bundle::bundle::decode_bundle;
//!
//! let certified_key = decode_bundle(pem_text.as_bytes())?;
//! ```

/// Bundle splitting and key pair construction entry points.
#[allow(clippy::module_inception)]
pub mod bundle;

/// Error types for bundle decoding.
pub mod enums;

/// Implementation blocks for PEM blocks, readers and bundles.
pub mod impls;

/// PEM data structures.
pub mod structs;
