//! Audit trail service.
//!
//! Backs the activity log page: a list filtered by free text, event
//! kind and date window, with severity counters computed over the
//! full trail regardless of active filters.

use std::sync::Arc;

use locker_listing::{DateWindow, ListState};
use tracing::info;

use crate::error::Result;
use crate::models::{ActivityKind, ActivityLogEntry, LogSeverity};
use crate::services::backend::AdminBackend;

/// Counters for the page's severity cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityStats {
    pub total: usize,
    pub info: usize,
    pub warning: usize,
    pub error: usize,
}

pub struct ActivityLogService {
    backend: Arc<dyn AdminBackend>,
    list: ListState<ActivityLogEntry>,
}

impl ActivityLogService {
    pub fn new(backend: Arc<dyn AdminBackend>, page_size: usize) -> Self {
        Self {
            backend,
            list: ListState::new(page_size),
        }
    }

    /// Fetch the full trail and replace the list.
    pub async fn load(&mut self) -> Result<()> {
        let entries = self.backend.fetch_activity_log().await?;
        info!(count = entries.len(), "activity log loaded");
        self.list.set_records(entries);
        Ok(())
    }

    /// Re-fetch, keeping the current filters.
    pub async fn refresh(&mut self) -> Result<()> {
        self.load().await
    }

    pub fn list(&self) -> &ListState<ActivityLogEntry> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState<ActivityLogEntry> {
        &mut self.list
    }

    /// Counters over the full trail, ignoring active filters.
    pub fn stats(&self) -> ActivityStats {
        let records = self.list.records();
        let count = |severity: LogSeverity| {
            records.iter().filter(|e| e.severity == severity).count()
        };
        ActivityStats {
            total: records.len(),
            info: count(LogSeverity::Info),
            warning: count(LogSeverity::Warning),
            error: count(LogSeverity::Error),
        }
    }

    // ---- filter bar ----

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.list.set_search(search);
    }

    pub fn set_kind(&mut self, kind: Option<ActivityKind>) {
        self.list.set_category(kind);
    }

    pub fn set_window(&mut self, window: DateWindow) {
        self.list.set_window(window);
    }

    pub fn clear_filters(&mut self) {
        self.list.clear_filters();
    }
}
