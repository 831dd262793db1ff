use sha2::{Digest, Sha256};

/// SHA-256 of the UTF-8 bytes of `text` followed by the raw salt
/// bytes. Deterministic: equal (text, salt) pairs always yield equal
/// digests.
pub fn salted_hash(text: &str, salt: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(salt);
    hasher.finalize().into()
}

/// Lowercase hex encoding of [`salted_hash`]. This is the digest form
/// stored in commitments and compared during verification.
pub fn salted_hash_hex(text: &str, salt: &[u8]) -> String {
    hex::encode(salted_hash(text, salt))
}
