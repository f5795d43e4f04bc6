//! Cryptographic operations.
//!
//! Provides the password-based encryption used for the subscription file.
//!
//! ## Backends
//!
//! - **aes-256-cbc**: OpenSSL salted format with `EVP_BytesToKey`/MD5 key
//!   derivation. Compatible with CryptoJS passphrase encryption.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

pub mod kdf;
mod salted;

pub use kdf::derive_key_and_iv;
pub use salted::Salted;

/// Cryptographic backend trait.
///
/// Abstracts password-based encryption of a text payload into a
/// text-safe (base64) envelope.
pub trait Cipher {
    /// Encrypt plaintext with a password.
    ///
    /// # Returns
    ///
    /// Encoded ciphertext (format depends on backend implementation).
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &str, password: &str) -> Result<String>;

    /// Decrypt an encoded ciphertext with a password.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the envelope is malformed, the password is
    /// wrong, or the plaintext is not UTF-8.
    fn decrypt(&self, encrypted: &str, password: &str) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext with the default salted AES-256-CBC backend.
///
/// This is a convenience wrapper around `Salted::encrypt`.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    Salted.encrypt(plaintext, password)
}

/// Decrypt a salted AES-256-CBC envelope.
///
/// This is a convenience wrapper around `Salted::decrypt`.
///
/// # Errors
///
/// Returns `CipherError::Padding` when the password doesn't match.
pub fn decrypt(encrypted: &str, password: &str) -> Result<String> {
    Salted.decrypt(encrypted, password)
}
