//! Data models for the admin engine.
//!
//! Defines the records shown on each admin page: platform accounts,
//! sponsorship contracts, monitored conversations, audit trail entries,
//! support emails and the dashboard snapshot.

mod activity;
mod contract;
mod conversation;
mod dashboard;
mod email;
mod user;

pub use activity::*;
pub use contract::*;
pub use conversation::*;
pub use dashboard::*;
pub use email::*;
pub use user::*;

use chrono::{DateTime, NaiveDate, Utc};

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC calendar date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
