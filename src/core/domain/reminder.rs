//! Reminder type.
//!
//! A renewal notice for one subscription, ready to be pushed.

use super::Subscription;

/// A pending renewal notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    name: String,
    days_left: i64,
    message: String,
}

impl Reminder {
    /// Build the notice for a subscription charged in `days_left` days.
    pub fn new(sub: &Subscription, days_left: i64) -> Self {
        let message = format!(
            "{} 将在 {} 天后扣费 ({}{})",
            sub.name, days_left, sub.price, sub.currency
        );
        Self {
            name: sub.name.clone(),
            days_left,
            message,
        }
    }

    /// Subscription name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days until the charge
    pub fn days_left(&self) -> i64 {
        self.days_left
    }

    /// Human-readable notification body
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
