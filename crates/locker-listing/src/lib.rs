//! List filtering and pagination engine for the LockerAI admin pages.
//!
//! Every admin page derives its visible rows the same way: a full record
//! set is narrowed by free-text search, an optional category filter and a
//! date window, then sliced into fixed-size pages. This crate holds that
//! shared engine so page services only declare which fields are searched
//! and which field acts as the category.
//!
//! The three predicates are ANDed:
//! - search: case-insensitive substring over the record's searched fields
//! - category: `None` passes everything, `Some(c)` requires equality
//! - window: record timestamp must fall within `[now - window, now]`
//!
//! An empty result is a valid state, not an error. Any change to the
//! filter inputs or the record set resets pagination to page 1.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

mod pager;
mod state;

pub use pager::Pager;
pub use state::ListState;

/// A record that can be filtered and paginated by [`ListState`].
pub trait ListRecord {
    /// Category type used by the equality filter.
    type Category: PartialEq;

    /// Stable in-memory key.
    fn id(&self) -> u64;

    /// Whether any searched field contains `needle`.
    ///
    /// `needle` arrives lowercased and non-empty; implementations compare
    /// with [`contains_ci`] over their searched fields.
    fn matches_query(&self, needle: &str) -> bool;

    fn category(&self) -> Self::Category;

    /// Timestamp used by the date-window filter. Records without one are
    /// excluded whenever a window other than [`DateWindow::All`] is active.
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Case-insensitive substring check. `needle` must already be lowercase.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle)
}

/// Date-range filter options shared by the admin pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    /// No date restriction.
    #[default]
    All,
    /// Since the start of the current day.
    Today,
    /// The past 7 days.
    Week,
    /// The past 30 days.
    Month,
}

impl DateWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::Today => "today",
            DateWindow::Week => "week",
            DateWindow::Month => "month",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(DateWindow::All),
            "today" => Some(DateWindow::Today),
            "week" => Some(DateWindow::Week),
            "month" => Some(DateWindow::Month),
            _ => None,
        }
    }

    /// Inclusive lower bound of the window relative to `now`, or `None`
    /// when unrestricted.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateWindow::All => None,
            DateWindow::Today => Some(now.date_naive().and_time(NaiveTime::MIN).and_utc()),
            DateWindow::Week => Some(now - chrono::Duration::days(7)),
            DateWindow::Month => Some(now - chrono::Duration::days(30)),
        }
    }
}

/// Filter inputs for a list: free-text search, category filter, window.
#[derive(Debug, Clone)]
pub struct ListQuery<C> {
    /// Raw search text; matching is case-insensitive substring.
    pub search: String,
    /// `None` means the category filter is off ("all").
    pub category: Option<C>,
    pub window: DateWindow,
}

impl<C> Default for ListQuery<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            window: DateWindow::All,
        }
    }
}

impl<C: PartialEq> ListQuery<C> {
    /// Whether `record` passes all three predicates. `needle` is the
    /// pre-lowercased search text.
    pub fn accepts<R>(&self, record: &R, needle: &str, now: DateTime<Utc>) -> bool
    where
        R: ListRecord<Category = C>,
    {
        if !needle.is_empty() && !record.matches_query(needle) {
            return false;
        }

        if let Some(category) = &self.category {
            if record.category() != *category {
                return false;
            }
        }

        match self.window.cutoff(now) {
            None => true,
            Some(cutoff) => match record.timestamp() {
                Some(ts) => ts >= cutoff && ts <= now,
                None => false,
            },
        }
    }
}
