//! OpenSSL `EVP_BytesToKey` key derivation (MD5, one round).
//!
//! This is the scheme `openssl enc` used before `-pbkdf2` and what CryptoJS
//! still uses for passphrase-based AES.

use md5::{Digest, Md5};
use tracing::trace;
use zeroize::Zeroizing;

/// Derive a key and IV from a password and salt.
///
/// Repeatedly hashes `previous digest ‖ password ‖ salt`, concatenating the
/// digests until `key_len + iv_len` bytes are available. An empty salt is
/// valid and contributes nothing to the hash input.
///
/// # Returns
///
/// `(key, iv)` of exactly `key_len` and `iv_len` bytes, wiped on drop.
pub fn derive_key_and_iv(
    password: &[u8],
    salt: &[u8],
    key_len: usize,
    iv_len: usize,
) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let total = key_len + iv_len;
    let mut derived = Zeroizing::new(Vec::with_capacity(total + 16));
    let mut block = Zeroizing::new(Vec::new());

    while derived.len() < total {
        let mut hasher = Md5::new();
        hasher.update(block.as_slice());
        hasher.update(password);
        hasher.update(salt);
        let digest = hasher.finalize();
        block.clear();
        block.extend_from_slice(&digest);
        derived.extend_from_slice(&block);
    }

    trace!(rounds = derived.len() / 16, key_len, iv_len, "derived key material");

    let key = Zeroizing::new(derived[..key_len].to_vec());
    let iv = Zeroizing::new(derived[key_len..total].to_vec());
    (key, iv)
}
