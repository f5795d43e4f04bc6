//! Constants used throughout subtrack.
//!
//! Centralizes magic strings and configuration values.

/// Encrypted subscription list, relative to the working directory.
pub const DATA_FILE: &str = "data/subscriptions.json.enc";

/// Environment variable holding the decryption password.
pub const MASTER_KEY_ENV: &str = "MASTER_KEY";

/// Environment variable holding the Bark server base URL.
pub const BARK_URL_ENV: &str = "BARK_URL";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SUBTRACK_LOG";

/// Marker at the start of the salted OpenSSL format.
pub const SALT_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length in the salted format.
pub const SALT_LEN: usize = 8;

/// AES-256 key length.
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length (one AES block).
pub const IV_LEN: usize = 16;

/// Days before the charge date that trigger a reminder.
pub const RENEWAL_THRESHOLDS: [i64; 3] = [3, 1, 0];

/// Offset in hours used to decide what "today" is.
pub const REMINDER_UTC_OFFSET_HOURS: i64 = 8;

/// Bark notification title path segment.
pub const NOTIFICATION_TITLE: &str = "订阅提醒";

/// Bark group all reminders are filed under.
pub const NOTIFICATION_GROUP: &str = "SubTrack";
