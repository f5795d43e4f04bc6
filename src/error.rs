//! Error types.
//!
//! A single top-level [`Error`] wraps one sub-enum per concern so callers can
//! match on the failure class while `?` keeps working across modules.

use thiserror::Error;

/// Top-level error for every subtrack operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid notification base url: {0}")]
    InvalidBaseUrl(String),

    #[error("encrypted file not found: {0}")]
    DataFileNotFound(String),
}

/// Errors from the salted AES-256-CBC format.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encrypted file is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("encrypted payload too short: {0} bytes, need at least 16")]
    Truncated(usize),

    #[error("ciphertext length {0} is not a non-zero multiple of the block size")]
    InvalidLength(usize),

    #[error("bad padding after decryption (wrong MASTER_KEY or corrupted file)")]
    Padding,

    #[error("decrypted payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors from the decrypted subscription list.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("invalid subscription list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid nextDate for {name}: {value:?}")]
    InvalidDate { name: String, value: String },
}

/// Notification delivery errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to notify for {name}: {source}")]
    Request {
        name: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
