use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::pem_bundle::PemBundle;
use crate::bundle::structs::pem_reader::PemReader;
use rustls::sign::CertifiedKey;

pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";
pub const EC_PARAMETERS_LABEL: &str = "EC PARAMETERS";
pub const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
pub const PRIVATE_KEY_SUFFIX: &str = " PRIVATE KEY";

/// Splits a bundle into its certificate chain and its first private key.
///
/// Certificates are kept in encounter order. OpenSSL writes EC keys as an
/// `EC PARAMETERS` block followed by the `EC PRIVATE KEY` block, so the pair is
/// taken together. Private keys after the first one are skipped.
pub fn split_bundle(bundle: &[u8]) -> Result<PemBundle, BundleError> {
    let mut certificate_chain = Vec::new();
    let mut private_key = Vec::new();
    let mut found_key = false;

    let mut blocks = PemReader::new(bundle);
    while let Some(block) = blocks.next() {
        if block.label == CERTIFICATE_LABEL {
            block.encode_into(&mut certificate_chain);
        } else if block.label == EC_PARAMETERS_LABEL {
            // The lookahead only happens while no key is taken yet: a stray
            // parameters block after the key is skipped without being checked.
            // Kept as-is for compatibility with existing stored bundles.
            if !found_key {
                block.encode_into(&mut private_key);
                match blocks.next() {
                    Some(key) if key.label == EC_PRIVATE_KEY_LABEL => key.encode_into(&mut private_key),
                    _ => return Err(BundleError::EcParametersWithoutKey),
                }
                found_key = true;
            }
        } else if block.is_private_key() {
            if !found_key {
                block.encode_into(&mut private_key);
                found_key = true;
            }
        } else {
            return Err(BundleError::UnrecognizedBlockType(block.label));
        }
    }

    if certificate_chain.is_empty() {
        return Err(BundleError::NoCertificate);
    }
    if private_key.is_empty() {
        return Err(BundleError::NoPrivateKey);
    }

    Ok(PemBundle {
        certificate_chain,
        private_key,
    })
}

pub fn decode_bundle(bundle: &[u8]) -> Result<CertifiedKey, BundleError> {
    split_bundle(bundle)?.into_certified_key()
}
