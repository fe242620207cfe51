use sha2::{Digest, Sha256};

/// SHA-256 over the UTF-8 bytes of `text`, rendered as 64 uppercase hex
/// characters.
///
/// This is the only hashing primitive in the crate: leaves and combined
/// levels alike go through it, so the root's identity depends solely on
/// SHA-256 and the uppercase hex rendering. Empty strings are accepted;
/// SHA-256 of zero bytes is well-defined.
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode_upper(hasher.finalize())
}
