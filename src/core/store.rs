//! Encrypted subscription file.
//!
//! Reads and writes the base64 salted-AES file at the configured path
//! (`data/subscriptions.json.enc` by default).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::cipher;
use crate::core::config::Config;
use crate::core::domain::{parse_list, Subscription};
use crate::error::Result;

/// Read the encrypted file.
///
/// # Returns
///
/// `None` if the file does not exist.
///
/// # Errors
///
/// Returns an IO error for anything other than a missing file.
pub fn read(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            debug!(path = %path.display(), bytes = contents.len(), "read encrypted file");
            Ok(Some(contents))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "encrypted file not found");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Load and decrypt the subscription list.
///
/// `MASTER_KEY` is only required when the file exists.
///
/// # Returns
///
/// `None` if there is no encrypted file.
///
/// # Errors
///
/// Returns `ConfigError` if `MASTER_KEY` is unset, `CipherError` if the file
/// can't be decrypted, or `PayloadError` if the plaintext isn't a list of
/// subscriptions.
pub fn load(config: &Config) -> Result<Option<Vec<Subscription>>> {
    let encrypted = match read(config.data_file())? {
        Some(encrypted) => encrypted,
        None => return Ok(None),
    };

    let json = cipher::decrypt(&encrypted, config.master_key()?)?;
    let subs = parse_list(&json)?;

    debug!(subscriptions = subs.len(), "subscriptions loaded");
    Ok(Some(subs))
}

/// Encrypt a subscription list and write it to the configured path.
///
/// Creates the parent directory if needed.
///
/// # Errors
///
/// Returns `ConfigError` if `MASTER_KEY` is unset, or an IO error if the file
/// can't be written.
pub fn save(config: &Config, subs: &[Subscription]) -> Result<()> {
    let password = config.master_key()?;
    let json = serde_json::to_string(subs).map_err(crate::error::PayloadError::from)?;
    let encrypted = cipher::encrypt(&json, password)?;

    let path = config.data_file();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, encrypted)?;

    debug!(path = %path.display(), subscriptions = subs.len(), "subscriptions saved");
    Ok(())
}
