//! Salted AES-256-CBC backend.
//!
//! Reads and writes the layout produced by `openssl enc -aes-256-cbc -md md5 -a`
//! and CryptoJS `AES.encrypt(text, passphrase)`:
//!
//! ```text
//! base64( "Salted__" | salt[8] | AES-256-CBC(PKCS#7) ciphertext )
//! ```

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{trace, warn};

use super::kdf::derive_key_and_iv;
use super::Cipher;
use crate::core::constants::{IV_LEN, KEY_LEN, SALT_LEN, SALT_MAGIC};
use crate::error::{CipherError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const BLOCK_LEN: usize = 16;
const HEADER_LEN: usize = SALT_MAGIC.len() + SALT_LEN;

/// Password-based AES-256-CBC in the OpenSSL salted format.
pub struct Salted;

impl Salted {
    /// Encrypt with a caller-chosen salt.
    ///
    /// Output is deterministic for a given password, salt and plaintext,
    /// which is what tests and fixtures need. Use [`Cipher::encrypt`] for
    /// real data so each file gets a fresh salt.
    pub fn encrypt_with_salt(
        &self,
        plaintext: &str,
        password: &str,
        salt: &[u8; SALT_LEN],
    ) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let (key, iv) = derive_key_and_iv(password.as_bytes(), salt, KEY_LEN, IV_LEN);
        let ciphertext = Aes256CbcEnc::new(key.as_slice().into(), iv.as_slice().into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let mut blob = Vec::with_capacity(HEADER_LEN + ciphertext.len());
        blob.extend_from_slice(SALT_MAGIC);
        blob.extend_from_slice(salt);
        blob.extend_from_slice(&ciphertext);

        trace!(ciphertext_len = ciphertext.len(), "encrypted");

        Ok(STANDARD.encode(blob))
    }
}

impl Cipher for Salted {
    fn name(&self) -> &'static str {
        "aes-256-cbc"
    }

    fn encrypt(&self, plaintext: &str, password: &str) -> Result<String> {
        let salt: [u8; SALT_LEN] = rand::random();
        self.encrypt_with_salt(plaintext, password, &salt)
    }

    fn decrypt(&self, encrypted: &str, password: &str) -> Result<String> {
        let compact: String = encrypted
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let blob = STANDARD.decode(compact).map_err(CipherError::from)?;

        if blob.len() < HEADER_LEN {
            return Err(CipherError::Truncated(blob.len()).into());
        }
        if &blob[..SALT_MAGIC.len()] != SALT_MAGIC {
            warn!("encrypted payload does not start with Salted__ marker");
        }

        let salt = &blob[SALT_MAGIC.len()..HEADER_LEN];
        let ciphertext = &blob[HEADER_LEN..];
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CipherError::InvalidLength(ciphertext.len()).into());
        }

        let (key, iv) = derive_key_and_iv(password.as_bytes(), salt, KEY_LEN, IV_LEN);
        let plaintext = Aes256CbcDec::new(key.as_slice().into(), iv.as_slice().into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CipherError::Padding)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");

        String::from_utf8(plaintext).map_err(|e| CipherError::Utf8(e).into())
    }
}
