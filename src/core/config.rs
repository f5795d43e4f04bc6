//! Runtime configuration.
//!
//! Built once at startup from CLI flags and environment variables, then
//! passed explicitly to the loader and notifier.

use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings for a single run.
///
/// Secrets stay optional until something needs them, so a run with no
/// encrypted file never has to have `MASTER_KEY` or `BARK_URL` set.
pub struct Config {
    master_key: Option<Zeroizing<String>>,
    bark_url: Option<String>,
    data_file: PathBuf,
}

impl Config {
    /// Create a configuration from explicit values.
    ///
    /// Empty strings count as unset.
    pub fn new(
        master_key: Option<String>,
        bark_url: Option<String>,
        data_file: impl Into<PathBuf>,
    ) -> Self {
        let config = Self {
            master_key: master_key.filter(|k| !k.is_empty()).map(Zeroizing::new),
            bark_url: bark_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            data_file: data_file.into(),
        };

        debug!(
            data_file = %config.data_file.display(),
            has_master_key = config.master_key.is_some(),
            has_bark_url = config.bark_url.is_some(),
            "config resolved"
        );

        config
    }

    /// Decryption password.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnv` if `MASTER_KEY` is not set.
    pub fn master_key(&self) -> Result<&str> {
        self.master_key
            .as_ref()
            .map(|k| k.as_str())
            .ok_or_else(|| ConfigError::MissingEnv(constants::MASTER_KEY_ENV).into())
    }

    /// Bark server base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnv` if `BARK_URL` is not set.
    pub fn bark_url(&self) -> Result<&str> {
        self.bark_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnv(constants::BARK_URL_ENV).into())
    }

    /// Path of the encrypted subscription list.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("master_key", &self.master_key.as_ref().map(|_| "<redacted>"))
            .field("bark_url", &self.bark_url)
            .field("data_file", &self.data_file)
            .finish()
    }
}
