//! Subtrack - renewal reminders for an encrypted subscription list.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use subtrack::cli::output;
use subtrack::cli::{execute, Cli};
use subtrack::core::constants;
use subtrack::error::{CipherError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("subtrack=debug")
        } else {
            EnvFilter::new("subtrack=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(console::colors_enabled_stderr())
                .with_writer(std::io::stderr),
        )
        .init();

    let config = cli.config();

    if let Err(e) = execute(cli.command, &config) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingEnv(var)) => Some(format!("export {}=...", var)),
            Error::Cipher(CipherError::Padding) => {
                Some("check that MASTER_KEY matches the one used to encrypt".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
