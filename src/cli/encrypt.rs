//! Encrypt command.
//!
//! Turns a plaintext JSON list into the encrypted data file.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::domain::parse_list;
use crate::core::store;
use crate::error::Result;

/// Validate `input` and write it encrypted to the configured data file.
///
/// Every `nextDate` is checked before anything is written, so a bad record
/// can't end up in the file and break the next check.
pub fn execute(config: &Config, input: &Path) -> Result<()> {
    let json = std::fs::read_to_string(input)?;
    let subs = parse_list(&json)?;
    for sub in &subs {
        sub.next_date()?;
    }

    store::save(config, &subs)?;

    output::success(&format!(
        "encrypted {} subscription{} to {}",
        subs.len(),
        if subs.len() == 1 { "" } else { "s" },
        output::path(&config.data_file().display().to_string())
    ));
    Ok(())
}
