//! Command-line interface.

pub mod check;
pub mod decrypt;
pub mod encrypt;
pub mod output;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;

/// Subtrack - renewal reminders for an encrypted subscription list.
#[derive(Parser)]
#[command(
    name = "subtrack",
    about = "Push renewal reminders for an encrypted subscription list",
    version,
    after_help = "Run with no arguments to check renewals and notify via Bark."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Encrypted subscription file
    #[arg(long, global = true, value_name = "PATH", default_value = constants::DATA_FILE)]
    pub file: PathBuf,

    /// Decryption password
    #[arg(long, global = true, env = constants::MASTER_KEY_ENV, hide_env_values = true)]
    pub master_key: Option<String>,

    /// Bark server URL including the device key
    #[arg(long, global = true, env = constants::BARK_URL_ENV, hide_env_values = true)]
    pub bark_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Send reminders for subscriptions renewing in 3, 1 or 0 days (default)
    Check {
        /// Evaluate as of this date (YYYY-MM-DD) instead of today in UTC+8
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// List due reminders without sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// Encrypt a plaintext JSON subscription list into the data file
    Encrypt {
        /// Path to a JSON array of {name, price, currency, nextDate}
        input: PathBuf,
    },

    /// Print the decrypted subscription list as JSON
    Decrypt,
}

impl Cli {
    /// Build the run configuration from parsed flags and environment.
    pub fn config(&self) -> Config {
        Config::new(
            self.master_key.clone(),
            self.bark_url.clone(),
            self.file.clone(),
        )
    }
}

/// Execute a command.
///
/// No subcommand means `check` with defaults.
pub fn execute(command: Option<Command>, config: &Config) -> crate::error::Result<()> {
    use Command::*;

    match command.unwrap_or(Check {
        date: None,
        dry_run: false,
    }) {
        Check { date, dry_run } => check::execute(config, date, dry_run),
        Encrypt { input } => encrypt::execute(config, &input),
        Decrypt => decrypt::execute(config),
    }
}
