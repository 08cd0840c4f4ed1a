/// PEM-encoded certificate chain and private key, re-encoded from a bundle.
pub struct PemBundle {
    pub certificate_chain: Vec<u8>,
    pub private_key: Vec<u8>,
}
