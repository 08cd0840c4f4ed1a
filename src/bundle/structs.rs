//! PEM data structures.

/// A single decoded PEM block.
pub mod pem_block;

/// The certificate chain and private key split out of a bundle.
pub mod pem_bundle;

/// Sequential PEM block scanner over a byte slice.
pub mod pem_reader;
