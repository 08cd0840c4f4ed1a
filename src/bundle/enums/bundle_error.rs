use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("failed to parse bundle")]
    NoCertificate,

    #[error("no private key block found")]
    NoPrivateKey,

    #[error("EC parameters must be immediately followed by the EC private key")]
    EcParametersWithoutKey,

    #[error("unrecognized PEM block type: {0}")]
    UnrecognizedBlockType(String),

    #[error("key pair construction error: {0}")]
    KeyPair(String),
}
