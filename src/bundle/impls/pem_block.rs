use crate::bundle::bundle::{PRIVATE_KEY_LABEL, PRIVATE_KEY_SUFFIX};
use crate::bundle::structs::pem_block::PemBlock;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const LINE_LENGTH: usize = 64;

impl PemBlock {
    pub fn new(label: &str, contents: Vec<u8>) -> Self {
        Self {
            label: label.to_string(),
            contents,
        }
    }

    pub fn is_private_key(&self) -> bool {
        self.label == PRIVATE_KEY_LABEL || self.label.ends_with(PRIVATE_KEY_SUFFIX)
    }

    /// Appends the block to `out` as armored PEM text. Headers are not preserved.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let encoded = STANDARD.encode(&self.contents);
        out.extend_from_slice(b"-----BEGIN ");
        out.extend_from_slice(self.label.as_bytes());
        out.extend_from_slice(b"-----\n");
        for line in encoded.as_bytes().chunks(LINE_LENGTH) {
            out.extend_from_slice(line);
            out.push(b'\n');
        }
        out.extend_from_slice(b"-----END ");
        out.extend_from_slice(self.label.as_bytes());
        out.extend_from_slice(b"-----\n");
    }

    pub fn to_pem(&self) -> String {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
