//! Test fixtures and constants.

/// Password used for encrypted fixtures.
pub const MASTER_KEY: &str = "correct-horse-battery-staple";

/// Reference date for `--date` runs.
pub const TODAY: &str = "2024-01-01";

/// Subscriptions 3, 9, 1, 0 and -1 days after [`TODAY`].
pub const MIXED_SUBSCRIPTIONS: &str = r#"[
    {"name": "Netflix", "price": 15.99, "currency": "USD", "nextDate": "2024-01-04"},
    {"name": "Spotify", "price": 9.99, "currency": "USD", "nextDate": "2024-01-10"},
    {"name": "iCloud", "price": 6, "currency": "CNY", "nextDate": "2024-01-02"},
    {"name": "ChatGPT", "price": 20, "currency": "USD", "nextDate": "2024-01-01"},
    {"name": "Notion", "price": 8, "currency": "USD", "nextDate": "2023-12-31"}
]"#;

/// A single subscription nine days after [`TODAY`].
pub const QUIET_SUBSCRIPTIONS: &str =
    r#"[{"name": "Spotify", "price": 9.99, "currency": "USD", "nextDate": "2024-01-10"}]"#;

/// A subscription whose date doesn't parse.
pub const BAD_DATE_SUBSCRIPTIONS: &str =
    r#"[{"name": "Broken", "price": 1, "currency": "USD", "nextDate": "next tuesday"}]"#;

/// Percent-encoded `订阅提醒` title segment.
pub const ENCODED_TITLE: &str = "%E8%AE%A2%E9%98%85%E6%8F%90%E9%86%92";
