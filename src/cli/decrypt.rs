//! Decrypt command.

use crate::core::config::Config;
use crate::core::store;
use crate::error::{ConfigError, PayloadError, Result};

/// Print the decrypted subscription list as pretty JSON on stdout.
pub fn execute(config: &Config) -> Result<()> {
    let subs = store::load(config)?.ok_or_else(|| {
        ConfigError::DataFileNotFound(config.data_file().display().to_string())
    })?;

    let json = serde_json::to_string_pretty(&subs).map_err(PayloadError::from)?;
    println!("{}", json);
    Ok(())
}
