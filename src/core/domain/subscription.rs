//! Subscription record.
//!
//! One entry of the decrypted subscription list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Date format of `nextDate`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recurring charge with its next billing date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Display name (e.g., Netflix)
    pub name: String,
    /// Amount charged, kept as written in the JSON so `10` stays `10`
    pub price: serde_json::Number,
    /// Currency code or symbol (e.g., CNY, USD)
    pub currency: String,
    /// Next charge date, `YYYY-MM-DD`
    #[serde(rename = "nextDate")]
    pub next_date: String,
}

impl Subscription {
    /// Parse the next charge date.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::InvalidDate` if `nextDate` isn't `YYYY-MM-DD`.
    pub fn next_date(&self) -> Result<NaiveDate, PayloadError> {
        NaiveDate::parse_from_str(&self.next_date, DATE_FORMAT).map_err(|_| {
            PayloadError::InvalidDate {
                name: self.name.clone(),
                value: self.next_date.clone(),
            }
        })
    }
}

impl std::fmt::Display for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Parse a decrypted JSON array of subscriptions.
///
/// # Errors
///
/// Returns `PayloadError::Json` if the text isn't a list of records.
pub fn parse_list(json: &str) -> Result<Vec<Subscription>, PayloadError> {
    Ok(serde_json::from_str(json)?)
}
