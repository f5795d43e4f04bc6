//! Subtrack - renewal reminders for an encrypted subscription list.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Decrypt, compare dates, notify (default)
//! │   ├── encrypt       # Write the encrypted data file
//! │   ├── decrypt       # Print the decrypted list
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Explicit run configuration
//!     ├── cipher/       # Salted AES-256-CBC + EVP_BytesToKey
//!     ├── domain/       # Subscription and Reminder types
//!     ├── schedule      # UTC+8 "today" and renewal thresholds
//!     ├── notify/       # Notifier trait and Bark client
//!     └── store         # Encrypted file read/write
//! ```
//!
//! # Pipeline
//!
//! 1. Read `data/subscriptions.json.enc`; nothing to do if it is absent
//! 2. Decrypt with `MASTER_KEY` (OpenSSL/CryptoJS compatible)
//! 3. For each subscription renewing in 3, 1 or 0 days, `GET` the Bark URL

pub mod cli;
pub mod core;
pub mod error;
