//! Bark push notifications.
//!
//! Bark takes everything in the path: `GET {server}/{key}/{title}/{body}`.
//! The configured base URL already includes the device key.

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::trace;

use super::Notifier;
use crate::core::constants::{NOTIFICATION_GROUP, NOTIFICATION_TITLE};
use crate::core::domain::Reminder;
use crate::error::{ConfigError, NotifyError, Result};

/// Bark client bound to one device URL.
pub struct Bark {
    client: Client,
    base_url: String,
}

impl Bark {
    /// Create a client for `base_url` (e.g. `https://api.day.app/<device key>`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL isn't absolute http(s),
    /// or `NotifyError::Client` if the HTTP client can't be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "unsupported scheme {:?}",
                parsed.scheme()
            ))
            .into());
        }

        let client = Client::builder().build().map_err(NotifyError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for a reminder.
    pub fn url_for(&self, reminder: &Reminder) -> String {
        format!(
            "{}/{}/{}?group={}",
            self.base_url,
            urlencoding::encode(NOTIFICATION_TITLE),
            urlencoding::encode(reminder.message()),
            NOTIFICATION_GROUP
        )
    }
}

impl Notifier for Bark {
    fn send(&self, reminder: &Reminder) -> Result<()> {
        trace!(name = reminder.name(), "sending bark notification");

        // Bark reports its own errors in the body; delivery isn't verified.
        self.client
            .get(self.url_for(reminder))
            .send()
            .map_err(|e| NotifyError::Request {
                name: reminder.name().to_string(),
                source: e.without_url(),
            })?;

        Ok(())
    }
}
