//! Dashboard overview service.

use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::models::{DashboardSnapshot, DashboardStats, RecentActivity};
use crate::services::backend::AdminBackend;

pub struct DashboardService {
    backend: Arc<dyn AdminBackend>,
    snapshot: Option<DashboardSnapshot>,
}

impl DashboardService {
    pub fn new(backend: Arc<dyn AdminBackend>) -> Self {
        Self {
            backend,
            snapshot: None,
        }
    }

    /// Fetch the overview snapshot.
    pub async fn load(&mut self) -> Result<()> {
        let snapshot = self.backend.fetch_dashboard().await?;
        info!(
            recent = snapshot.recent_activities.len(),
            "dashboard loaded"
        );
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Re-fetch the snapshot.
    pub async fn refresh(&mut self) -> Result<()> {
        self.load().await
    }

    /// `None` until the first successful load.
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.snapshot.as_ref().map(|s| &s.stats)
    }

    pub fn recent_activities(&self) -> &[RecentActivity] {
        self.snapshot
            .as_ref()
            .map(|s| s.recent_activities.as_slice())
            .unwrap_or_default()
    }
}
