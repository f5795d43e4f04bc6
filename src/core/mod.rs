//! Core library components.
//!
//! Decryption of the subscription file, renewal date arithmetic, and
//! notification dispatch.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod notify;
pub mod schedule;
pub mod store;
