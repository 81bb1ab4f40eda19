//! LockerAI Admin - headless dashboard engine
//!
//! Loads every admin page against the mock platform backend, then
//! walks a scripted admin session: reviewing the dashboard, managing
//! accounts and contracts, reading a negotiation transcript, sending
//! a support email and completing a password reset.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locker_admin::models::ContractStatus;
use locker_admin::services::backend::{LatencyProfile, MockBackend};
use locker_admin::services::{AuthStage, ChatModal};
use locker_admin::{config, AppState, Result};
use locker_listing::DateWindow;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locker_admin=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::init();
    tracing::info!(
        fetch_delay_ms = config.latency.fetch_ms,
        send_delay_ms = config.latency.send_ms,
        page_size = config.paging.default_page_size,
        "Starting LockerAI admin engine"
    );

    // Wire every page to the latency-simulating mock platform
    let backend = Arc::new(MockBackend::new(LatencyProfile::from_config()));
    let mut state = AppState::new(backend);

    // Sign in before anything else
    state
        .auth
        .set_credentials("admin@lockerai.com", "locker-admin")?;
    state.auth.sign_in().await?;

    state.load_all().await?;
    tracing::info!("========================================");
    tracing::info!("  LOCKERAI ADMIN ENGINE READY");
    tracing::info!("========================================");

    // Overview page
    if let Some(stats) = state.dashboard.stats() {
        tracing::info!("Dashboard stats:\n{}", serde_json::to_string_pretty(stats)?);
    }
    for activity in state.dashboard.recent_activities() {
        tracing::info!(time = %activity.time, "{}", activity.message);
    }

    // Account management: search, then onboard a new athlete
    state.users.list_mut().set_search("john");
    for user in state.users.list().page() {
        tracing::info!(id = user.id, email = %user.email, "account match: {}", user.name);
    }
    state.users.list_mut().clear_filters();

    state.users.open_create();
    if let Some(form) = state.users.form_mut() {
        form.name = "Jordan Baker".to_string();
        form.email = "jordan.b@email.com".to_string();
    }
    state.users.submit_create()?;
    tracing::info!(total = state.users.list().len(), "athlete onboarded");

    // Contracts: stat cards, the active portfolio, then a termination
    let contract_stats = state.contracts.stats();
    tracing::info!(
        total = contract_stats.total,
        active = contract_stats.active,
        expiring = contract_stats.expiring_soon,
        "contract portfolio"
    );
    state
        .contracts
        .list_mut()
        .set_category(Some(ContractStatus::Active));
    for contract in state.contracts.list().page() {
        tracing::info!(
            id = contract.id,
            days_left = contract.days_until_expiry,
            "active: {} with {}",
            contract.athlete.name,
            contract.brand.name
        );
    }
    state.contracts.list_mut().set_category(None);

    state.contracts.open_terminate(1)?;
    state.contracts.confirm_terminate()?;
    tracing::info!(active = state.contracts.stats().active, "after termination");

    // Chat oversight: read the top negotiation
    state.chat.open_conversation(1).await?;
    if let ChatModal::View { transcript, .. } = state.chat.modal() {
        for message in transcript {
            tracing::debug!(
                sender = ?message.sender,
                at = %message.timestamp,
                "{}",
                message.message
            );
        }
    }
    state.chat.close_modal();

    // Audit trail: severity cards and a quick search
    let activity_stats = state.activity.stats();
    tracing::info!(
        info = activity_stats.info,
        warning = activity_stats.warning,
        error = activity_stats.error,
        "audit trail severity"
    );
    state.activity.set_search("contract");
    tracing::info!(
        matches = state.activity.list().filtered_len(),
        "entries mentioning contracts"
    );
    state.activity.set_window(DateWindow::Month);
    tracing::info!(
        matches = state.activity.list().filtered_len(),
        "of those, in the past month"
    );
    state.activity.clear_filters();

    // Support email: canned reminder to two accounts
    state.email.load_template("Contract Reminder")?;
    state.email.toggle_user(1)?;
    state.email.toggle_user(3)?;
    tracing::info!(recipients = %state.email.resolved_recipients(), "composing email");
    state.email.send().await?;
    tracing::info!(history = state.email.history().len(), "email delivered");

    // Password reset, end to end
    state.auth.start_password_reset()?;
    state.auth.set_reset_email("admin@lockerai.com")?;
    state.auth.request_reset().await?;
    for (slot, digit) in [2u8, 4, 6, 1, 3, 9].into_iter().enumerate() {
        state.auth.set_digit(slot, digit)?;
    }
    state.auth.verify_code().await?;
    if let Some(form) = state.auth.password_form_mut() {
        form.new_password = "Str0ng!Pass".to_string();
        form.confirm_password = "Str0ng!Pass".to_string();
    }
    state.auth.submit_new_password().await?;
    if matches!(state.auth.stage(), AuthStage::SignIn { .. }) {
        tracing::info!("password reset complete, back at sign-in");
    }

    Ok(())
}
