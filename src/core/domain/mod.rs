//! Domain types.

mod reminder;
mod subscription;

pub use reminder::Reminder;
pub use subscription::{parse_list, Subscription};
