//! Renewal check command.
//!
//! Load the encrypted list, work out what renews in 3, 1 or 0 days and push
//! one Bark notification per match.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::notify::{self, Bark, Deferred, DryRun, Notifier};
use crate::core::{schedule, store};
use crate::error::Result;

/// Run the reminder pass.
///
/// A missing data file is a no-op. `BARK_URL` is only read once a reminder
/// is due, and never for a dry run.
pub fn execute(config: &Config, date: Option<NaiveDate>, dry_run: bool) -> Result<()> {
    let subs = match store::load(config)? {
        Some(subs) => subs,
        None => {
            output::dimmed(&format!(
                "no encrypted file at {}, skipping",
                output::path(&config.data_file().display().to_string())
            ));
            return Ok(());
        }
    };

    let today = date.unwrap_or_else(|| schedule::today(Utc::now()));
    debug!(%today, subscriptions = subs.len(), dry_run, "checking renewals");

    let notifier: Box<dyn Notifier + '_> = if dry_run {
        Box::new(DryRun)
    } else {
        Box::new(Deferred::new(|| Bark::new(config.bark_url()?)))
    };

    let sent = notify::run_reminders(&subs, today, notifier.as_ref())?;

    if sent.is_empty() {
        output::dimmed("no renewals due");
    }
    for reminder in &sent {
        output::success(reminder.message());
    }

    Ok(())
}
