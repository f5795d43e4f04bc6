//! Renewal notifications.
//!
//! Walks the subscription list, picks the ones due for a reminder and hands
//! them to a [`Notifier`] one at a time. The first failure aborts the pass.

use std::cell::OnceCell;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::domain::{Reminder, Subscription};
use crate::core::schedule;
use crate::error::Result;

mod bark;

pub use bark::Bark;

/// Delivery channel for reminders.
pub trait Notifier {
    /// Push a single reminder. The response content is not inspected.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if the reminder could not be sent.
    fn send(&self, reminder: &Reminder) -> Result<()>;
}

/// Notifier that sends nothing, for previewing which reminders are due.
pub struct DryRun;

impl Notifier for DryRun {
    fn send(&self, reminder: &Reminder) -> Result<()> {
        debug!(name = reminder.name(), "dry run, not sending");
        Ok(())
    }
}

/// Notifier built on first use.
///
/// Holds off constructing the inner notifier until a reminder is actually
/// due, so a pass with nothing to send never reads `BARK_URL`. A failed
/// build is returned from that `send` and retried on the next one.
pub struct Deferred<N, F> {
    build: F,
    inner: OnceCell<N>,
}

impl<N, F> Deferred<N, F>
where
    N: Notifier,
    F: Fn() -> Result<N>,
{
    pub fn new(build: F) -> Self {
        Self {
            build,
            inner: OnceCell::new(),
        }
    }

    /// Whether the inner notifier has been built.
    pub fn is_built(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl<N, F> Notifier for Deferred<N, F>
where
    N: Notifier,
    F: Fn() -> Result<N>,
{
    fn send(&self, reminder: &Reminder) -> Result<()> {
        let inner = match self.inner.get() {
            Some(inner) => inner,
            None => {
                debug!("building notifier");
                let built = (self.build)()?;
                self.inner.get_or_init(|| built)
            }
        };
        inner.send(reminder)
    }
}

/// Send a reminder for every subscription whose charge is 3, 1 or 0 days
/// after `today`.
///
/// Records are processed in order. A bad `nextDate` or a delivery failure
/// stops the pass; reminders already sent stay sent.
///
/// # Returns
///
/// The reminders that were sent.
pub fn run_reminders<N: Notifier + ?Sized>(
    subs: &[Subscription],
    today: NaiveDate,
    notifier: &N,
) -> Result<Vec<Reminder>> {
    let mut sent = Vec::new();

    for sub in subs {
        let days = schedule::days_left(sub.next_date()?, today);
        debug!(subscription = %sub, days_left = days, "checked subscription");

        if !schedule::is_renewal_threshold(days) {
            continue;
        }

        let reminder = Reminder::new(sub, days);
        notifier.send(&reminder)?;
        info!(subscription = %sub, days_left = days, "reminder sent");
        sent.push(reminder);
    }

    Ok(sent)
}
