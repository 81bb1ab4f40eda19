//! Application state for the admin engine.
//!
//! Owns one service per admin page, all talking to the same backend.

use std::sync::Arc;

use crate::services::backend::AdminBackend;
use crate::services::{
    ActivityLogService, AuthFlowService, ChatService, ContractService, DashboardService,
    SupportEmailService, UserService,
};
use crate::{config, Result};

/// One service per admin surface, sharing a single backend handle.
pub struct AppState {
    /// Data source behind every page.
    pub backend: Arc<dyn AdminBackend>,
    /// Overview page snapshot.
    pub dashboard: DashboardService,
    /// Account management page.
    pub users: UserService,
    /// Sponsorship contracts page.
    pub contracts: ContractService,
    /// Conversation oversight page.
    pub chat: ChatService,
    /// Audit trail page.
    pub activity: ActivityLogService,
    /// Support email composer page.
    pub email: SupportEmailService,
    /// Sign-in and password reset flow.
    pub auth: AuthFlowService,
}

impl AppState {
    /// Create the application state, wiring every page service to the
    /// given backend with page sizes and cooldowns from configuration.
    pub fn new(backend: Arc<dyn AdminBackend>) -> Self {
        let config = config::config();
        let page_size = config.paging.default_page_size;
        let activity_page_size = config.paging.activity_page_size;

        Self {
            dashboard: DashboardService::new(backend.clone()),
            users: UserService::new(backend.clone(), page_size),
            contracts: ContractService::new(backend.clone(), page_size),
            chat: ChatService::new(backend.clone(), page_size),
            activity: ActivityLogService::new(backend.clone(), activity_page_size),
            email: SupportEmailService::new(backend.clone()),
            auth: AuthFlowService::new(backend.clone(), config.auth.resend_cooldown_secs),
            backend,
        }
    }

    /// Load every page at once, the way the dashboard shell mounts.
    pub async fn load_all(&mut self) -> Result<()> {
        let Self {
            dashboard,
            users,
            contracts,
            chat,
            activity,
            email,
            ..
        } = self;

        tokio::try_join!(
            dashboard.load(),
            users.load(),
            contracts.load(),
            chat.load(),
            activity.load(),
            email.load(),
        )?;
        Ok(())
    }
}
