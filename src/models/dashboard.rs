//! Dashboard overview models.

use serde::{Deserialize, Serialize};

use super::ActivityKind;

/// Platform-wide counters shown on the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_athletes: u64,
    pub total_brands: u64,
    pub active_contracts: u64,
    pub pending_emails: u64,
}

/// One row of the dashboard's recent activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RecentActivity {
    pub id: u64,
    pub kind: ActivityKind,
    pub message: String,
    /// Relative label as the platform reported it ("2 hours ago")
    pub time: String,
}

/// Everything the overview page renders in one fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub recent_activities: Vec<RecentActivity>,
}
