//! Integration tests for the LockerAI admin engine.
//!
//! Drives the page services end to end against the instant mock
//! backend: loads, filters, pagination, modal flows, email delivery
//! and the password reset stage machine.

use std::sync::Arc;

use fake::faker::name::en::Name;
use fake::Fake;

use locker_admin::models::{
    self, ActivityKind, ContractStatus, ConversationStatus, MessageKind, RecipientMode,
    UserCategory, UserStatus,
};
use locker_admin::services::backend::{LatencyProfile, MockBackend};
use locker_admin::services::{AuthFlowService, AuthStage, ChatModal, UserModal};
use locker_admin::{AppState, Result};
use locker_listing::DateWindow;

fn instant_state() -> AppState {
    let backend = Arc::new(MockBackend::new(LatencyProfile::instant()));
    AppState::new(backend)
}

// ============================================================================
// Page Load Tests
// ============================================================================

/// Test that loading the shell seeds every page in one pass
#[tokio::test]
async fn test_load_all_seeds_every_page() -> Result<()> {
    let mut state = instant_state();
    state.load_all().await?;

    assert_eq!(state.users.list().len(), 5);
    assert_eq!(state.contracts.list().len(), 4);
    assert_eq!(state.chat.list().len(), 5);
    assert_eq!(state.activity.list().len(), 10);
    assert_eq!(state.email.history().len(), 3);
    assert!(state.dashboard.snapshot().is_some());
    assert_eq!(state.dashboard.recent_activities().len(), 5);

    Ok(())
}

// ============================================================================
// User Management Tests
// ============================================================================

/// Test that search and category filters combine over name and email
#[tokio::test]
async fn test_user_search_and_category_filter() -> Result<()> {
    let mut state = instant_state();
    state.users.load().await?;

    state.users.list_mut().set_search("john");
    assert_eq!(state.users.list().filtered_len(), 2); // John Doe, Mike Johnson

    state
        .users
        .list_mut()
        .set_category(Some(UserCategory::Brand));
    assert_eq!(state.users.list().filtered_len(), 0);

    state.users.list_mut().clear_filters();
    assert_eq!(state.users.list().filtered_len(), 5);

    state
        .users
        .list_mut()
        .set_category(Some(UserCategory::Brand));
    assert_eq!(state.users.list().filtered_len(), 2); // Nike Inc, Adidas

    Ok(())
}

/// Test that a created account gets the next id, today's join date and no login
#[tokio::test]
async fn test_create_user_gets_fresh_id() -> Result<()> {
    let mut state = instant_state();
    state.users.load().await?;

    state.users.open_create();
    let form = state.users.form_mut().unwrap();
    form.name = "Jordan Baker".to_string();
    form.email = "jordan.b@email.com".to_string();
    state.users.submit_create()?;

    assert!(matches!(state.users.modal(), UserModal::Closed));
    let created = state.users.list().get(6).unwrap();
    assert_eq!(created.name, "Jordan Baker");
    assert_eq!(created.category, UserCategory::Athlete);
    assert_eq!(created.status, UserStatus::Active);
    assert_eq!(created.join_date, models::today());
    assert!(created.last_login.is_none());

    Ok(())
}

/// Test that ids are never reused, even after the highest account is deleted
#[tokio::test]
async fn test_deleted_user_id_is_not_reused() -> Result<()> {
    let mut state = instant_state();
    state.users.load().await?;

    state.users.open_delete(5)?;
    state.users.confirm_delete()?;
    assert_eq!(state.users.list().len(), 4);

    state.users.open_create();
    let form = state.users.form_mut().unwrap();
    form.name = "Replacement".to_string();
    form.email = "replacement@example.com".to_string();
    state.users.submit_create()?;

    assert!(state.users.list().get(5).is_none());
    assert!(state.users.list().get(6).is_some());

    Ok(())
}

/// Test that an edit draft applies on submit and closes the modal
#[tokio::test]
async fn test_edit_user_applies_draft() -> Result<()> {
    let mut state = instant_state();
    state.users.load().await?;

    state.users.open_edit(3)?;
    let form = state.users.form_mut().unwrap();
    assert_eq!(form.name, "Sarah Wilson");
    form.name = "Sarah W.".to_string();
    form.status = UserStatus::Active;
    state.users.submit_edit()?;

    let edited = state.users.list().get(3).unwrap();
    assert_eq!(edited.name, "Sarah W.");
    assert_eq!(edited.status, UserStatus::Active);
    assert!(matches!(state.users.modal(), UserModal::Closed));

    Ok(())
}

/// Test that closing a modal discards its draft
#[tokio::test]
async fn test_cancel_discards_draft() -> Result<()> {
    let mut state = instant_state();
    state.users.load().await?;

    state.users.open_edit(1)?;
    state.users.form_mut().unwrap().name = "Scrapped Name".to_string();
    state.users.close_modal();

    assert_eq!(state.users.list().get(1).unwrap().name, "John Doe");
    state.users.open_edit(1)?;
    assert_eq!(state.users.form_mut().unwrap().name, "John Doe");

    Ok(())
}

/// Test that a weak password keeps the modal open and a strong one closes it
#[tokio::test]
async fn test_password_change_gating() -> Result<()> {
    let mut state = instant_state();
    state.users.load().await?;

    state.users.open_change_password(1)?;
    let form = state.users.password_form_mut().unwrap();
    // long enough but only two criteria
    form.new_password = "abcdefgh".to_string();
    form.confirm_password = "abcdefgh".to_string();
    assert!(state.users.submit_password_change().is_err());
    assert!(matches!(
        state.users.modal(),
        UserModal::ChangePassword { .. }
    ));

    let form = state.users.password_form_mut().unwrap();
    form.new_password = "Abc123!9".to_string();
    form.confirm_password = "Abc123!9".to_string();
    state.users.submit_password_change()?;
    assert!(matches!(state.users.modal(), UserModal::Closed));

    Ok(())
}

/// Test that changing a filter snaps pagination back to the first page
#[tokio::test]
async fn test_pagination_resets_on_filter_change() -> Result<()> {
    let mut state = instant_state();
    state.users.load().await?;

    for i in 0..45 {
        state.users.open_create();
        let form = state.users.form_mut().unwrap();
        form.name = Name().fake();
        form.email = format!("user{}@example.com", i);
        state.users.submit_create()?;
    }
    assert_eq!(state.users.list().len(), 50);
    assert_eq!(state.users.list().total_pages(), 3);

    state.users.list_mut().go_to(3);
    assert_eq!(state.users.list().page().len(), 10);

    // narrowing to the generated accounts resets to page 1
    state.users.list_mut().set_search("user");
    assert_eq!(state.users.list().filtered_len(), 45);
    assert_eq!(state.users.list().current_page(), 1);
    assert_eq!(state.users.list().total_pages(), 3);

    state.users.list_mut().go_to(99);
    assert_eq!(state.users.list().current_page(), 3);

    Ok(())
}

// ============================================================================
// Contract Tests
// ============================================================================

/// Test that seed statuses land as expected and the status filter narrows
#[tokio::test]
async fn test_contract_seed_statuses_and_filter() -> Result<()> {
    let mut state = instant_state();
    state.contracts.load().await?;

    let stats = state.contracts.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.expiring_soon, 1);
    assert_eq!(stats.expired, 1);

    state
        .contracts
        .list_mut()
        .set_category(Some(ContractStatus::Active));
    assert_eq!(state.contracts.list().filtered_len(), 1);
    assert_eq!(state.contracts.list().page()[0].id, 1);

    Ok(())
}

/// Test that terminating is only offered for active contracts
#[tokio::test]
async fn test_terminate_requires_active() -> Result<()> {
    let mut state = instant_state();
    state.contracts.load().await?;

    // contract 4 is pending
    assert!(state.contracts.open_terminate(4).is_err());

    state.contracts.open_terminate(1)?;
    state.contracts.confirm_terminate()?;
    assert_eq!(
        state.contracts.list().get(1).unwrap().status,
        ContractStatus::Terminated
    );

    Ok(())
}

/// Test that termination flips the status and nothing else
#[tokio::test]
async fn test_terminate_touches_only_status() -> Result<()> {
    let mut state = instant_state();
    state.contracts.load().await?;

    let before = state.contracts.list().get(1).unwrap().clone();
    state.contracts.open_terminate(1)?;
    state.contracts.confirm_terminate()?;

    let after = state.contracts.list().get(1).unwrap();
    assert_eq!(after.status, ContractStatus::Terminated);
    assert_eq!(after.amount, before.amount);
    assert_eq!(after.start_date, before.start_date);
    assert_eq!(after.end_date, before.end_date);
    assert_eq!(after.athlete, before.athlete);
    assert_eq!(after.brand, before.brand);
    assert_eq!(after.days_until_expiry, before.days_until_expiry);
    assert_eq!(state.contracts.list().len(), 4);

    Ok(())
}

/// Test that a created contract carries placeholder parties and a fresh expiry
#[tokio::test]
async fn test_create_contract_uses_placeholder_parties() -> Result<()> {
    let mut state = instant_state();
    state.contracts.load().await?;

    state.contracts.open_create();
    let form = state.contracts.form_mut().unwrap();
    form.athlete_id = "9".to_string();
    form.brand_id = "12".to_string();
    form.start_date = Some(models::today());
    form.end_date = Some(models::today() + chrono::Duration::days(10));
    form.amount = "60000".to_string();
    state.contracts.submit_create()?;

    let created = state.contracts.list().get(5).unwrap();
    assert_eq!(created.athlete.id, 9);
    assert_eq!(created.athlete.name, "New Athlete");
    assert_eq!(created.brand.email, "brand@example.com");
    assert_eq!(created.amount, 60_000);
    assert_eq!(created.status, ContractStatus::Pending);
    assert_eq!(created.created_date, models::today());
    assert_eq!(created.days_until_expiry, 10);

    Ok(())
}

/// Test that editing the end date recomputes the expiry countdown
#[tokio::test]
async fn test_edit_contract_recomputes_expiry() -> Result<()> {
    let mut state = instant_state();
    state.contracts.load().await?;

    state.contracts.open_edit(1)?;
    let form = state.contracts.form_mut().unwrap();
    form.end_date = Some(models::today() + chrono::Duration::days(30));
    form.amount = "55000".to_string();
    state.contracts.submit_edit()?;

    let edited = state.contracts.list().get(1).unwrap();
    assert_eq!(edited.days_until_expiry, 30);
    assert_eq!(edited.amount, 55_000);
    // parties are resolved by the platform, edits leave them alone
    assert_eq!(edited.athlete.name, "John Doe");

    Ok(())
}

// ============================================================================
// Chat Tests
// ============================================================================

/// Test that each conversation gets its own transcript with one contract draft
#[tokio::test]
async fn test_transcripts_are_per_conversation() -> Result<()> {
    let mut state = instant_state();
    state.chat.load().await?;

    state.chat.open_conversation(1).await?;
    let nike_greeting = match state.chat.modal() {
        ChatModal::View { transcript, .. } => {
            assert_eq!(transcript.len(), 8);
            assert!(transcript
                .iter()
                .any(|m| matches!(&m.kind, MessageKind::File { file_name }
                    if file_name == "Nike_Partnership_Contract_Draft.pdf")));
            transcript[0].message.clone()
        }
        ChatModal::Closed => panic!("viewer should be open"),
    };

    state.chat.open_conversation(3).await?;
    match state.chat.modal() {
        ChatModal::View { transcript, .. } => {
            assert!(transcript[0].message.contains("Hi David!"));
            assert_ne!(transcript[0].message, nike_greeting);
        }
        ChatModal::Closed => panic!("viewer should be open"),
    }

    // unknown id leaves the viewer as it was
    assert!(state.chat.open_conversation(99).await.is_err());

    Ok(())
}

/// Test that the status filter and header counters agree on active threads
#[tokio::test]
async fn test_conversation_status_filter() -> Result<()> {
    let mut state = instant_state();
    state.chat.load().await?;

    let stats = state.chat.stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.active, 2);

    state
        .chat
        .list_mut()
        .set_category(Some(ConversationStatus::Active));
    assert_eq!(state.chat.list().filtered_len(), 2);

    state.chat.list_mut().set_search("nike");
    assert_eq!(state.chat.list().filtered_len(), 1);

    Ok(())
}

// ============================================================================
// Activity Log Tests
// ============================================================================

/// Test that search, kind and window combine and clearing restores everything
#[tokio::test]
async fn test_activity_filters_and_window() -> Result<()> {
    let mut state = instant_state();
    state.activity.load().await?;

    state.activity.set_search("contract");
    assert_eq!(state.activity.list().filtered_len(), 4);

    state.activity.set_kind(Some(ActivityKind::ContractSigned));
    assert_eq!(state.activity.list().filtered_len(), 1);

    // the seeded trail predates any live window
    state.activity.set_window(DateWindow::Today);
    assert_eq!(state.activity.list().filtered_len(), 0);

    state.activity.clear_filters();
    assert_eq!(state.activity.list().filtered_len(), 10);

    Ok(())
}

/// Test that severity counters always reflect the unfiltered trail
#[tokio::test]
async fn test_activity_stats_ignore_filters() -> Result<()> {
    let mut state = instant_state();
    state.activity.load().await?;

    state.activity.set_search("nothing matches this");
    assert_eq!(state.activity.list().filtered_len(), 0);

    let stats = state.activity.stats();
    assert_eq!(stats.total, 10);
    assert_eq!(stats.info, 7);
    assert_eq!(stats.warning, 2);
    assert_eq!(stats.error, 1);

    Ok(())
}

// ============================================================================
// Support Email Tests
// ============================================================================

/// Test that specific mode needs at least one picked recipient before sending
#[tokio::test]
async fn test_send_requires_recipients_in_specific_mode() -> Result<()> {
    let mut state = instant_state();
    state.email.load().await?;

    state.email.set_subject("Hello");
    state.email.set_message("Body");
    assert!(!state.email.can_send());
    assert!(state.email.send().await.is_err());
    assert_eq!(state.email.history().len(), 3);

    state.email.toggle_user(1)?;
    assert!(state.email.can_send());

    Ok(())
}

/// Test that a sent email lands at the top of the history and resets the form
#[tokio::test]
async fn test_send_appends_history_and_resets_form() -> Result<()> {
    let mut state = instant_state();
    state.email.load().await?;

    state.email.set_mode(RecipientMode::All);
    state.email.load_template("Platform Update")?;
    state.email.send().await?;

    assert_eq!(state.email.history().len(), 4);
    let newest = &state.email.history()[0];
    assert_eq!(newest.id, 4);
    assert_eq!(newest.subject, "Important Platform Updates");
    assert_eq!(newest.recipients, "All Users");
    assert_eq!(newest.sent_date, models::today());

    // form is back to its defaults
    assert_eq!(state.email.form().mode, RecipientMode::Specific);
    assert!(state.email.form().subject.is_empty());
    assert!(state.email.form().selected.is_empty());

    assert_eq!(state.email.recent(5).len(), 4);

    Ok(())
}

/// Test that the audience label follows the mode and the picked accounts
#[tokio::test]
async fn test_recipient_resolution() -> Result<()> {
    let mut state = instant_state();
    state.email.load().await?;

    assert_eq!(state.email.resolved_recipients(), "No users selected");

    state.email.toggle_user(1)?;
    state.email.toggle_user(3)?;
    assert_eq!(state.email.resolved_recipients(), "John Doe, Sarah Wilson");

    state.email.toggle_user(3)?;
    assert_eq!(state.email.resolved_recipients(), "John Doe");

    state.email.set_mode(RecipientMode::Athletes);
    assert_eq!(state.email.resolved_recipients(), "All Athletes");

    Ok(())
}

/// Test that templates copy into the form and unknown names are refused
#[tokio::test]
async fn test_load_template() -> Result<()> {
    let mut state = instant_state();
    state.email.load().await?;

    state.email.load_template("Welcome Message")?;
    assert_eq!(state.email.form().subject, "Welcome to LockerAI Platform");
    assert!(state.email.form().message.starts_with("Welcome to LockerAI!"));

    assert!(state.email.load_template("Nonexistent").is_err());

    Ok(())
}

/// Test that switching audience drops the hand-picked selection
#[tokio::test]
async fn test_mode_switch_clears_selection() -> Result<()> {
    let mut state = instant_state();
    state.email.load().await?;

    state.email.toggle_user(1)?;
    state.email.toggle_user(2)?;
    assert_eq!(state.email.form().selected.len(), 2);

    state.email.set_mode(RecipientMode::Brands);
    assert!(state.email.form().selected.is_empty());

    // picking is refused outside specific mode
    assert!(state.email.toggle_user(1).is_err());

    state.email.set_mode(RecipientMode::Specific);
    assert_eq!(state.email.resolved_recipients(), "No users selected");

    Ok(())
}

/// Test that the picker's search narrows over names and emails
#[tokio::test]
async fn test_user_picker_search() -> Result<()> {
    let mut state = instant_state();
    state.email.load().await?;

    assert_eq!(state.email.visible_users().len(), 5);

    state.email.set_user_search("adidas");
    let visible = state.email.visible_users();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Adidas");

    Ok(())
}

// ============================================================================
// Auth Flow Tests
// ============================================================================

/// Test that sign-in insists on both credentials and clears them on success
#[tokio::test]
async fn test_sign_in_requires_credentials() -> Result<()> {
    let mut state = instant_state();

    assert!(state.auth.sign_in().await.is_err());

    state.auth.set_credentials("admin@lockerai.com", "")?;
    assert!(state.auth.sign_in().await.is_err());

    state.auth.set_credentials("admin@lockerai.com", "hunter22")?;
    state.auth.sign_in().await?;
    match state.auth.stage() {
        AuthStage::SignIn { email, password } => {
            assert!(email.is_empty());
            assert!(password.is_empty());
        }
        _ => panic!("expected a blank sign-in form"),
    }

    Ok(())
}

/// Test the reset flow from sign-in through code entry to a new password
#[tokio::test]
async fn test_full_password_reset_flow() -> Result<()> {
    let mut state = instant_state();

    state.auth.start_password_reset()?;
    state.auth.set_reset_email("admin@lockerai.com")?;
    state.auth.request_reset().await?;
    assert!(matches!(state.auth.stage(), AuthStage::VerifyCode { .. }));

    // code entry refuses to submit until all six digits are in
    assert!(state.auth.verify_code().await.is_err());
    for (slot, digit) in [7u8, 1, 0, 9, 4, 2].into_iter().enumerate() {
        state.auth.set_digit(slot, digit)?;
    }
    assert!(state.auth.code_complete());
    state.auth.verify_code().await?;
    assert!(matches!(
        state.auth.stage(),
        AuthStage::ChangePassword { .. }
    ));

    // weak password is rejected, the stage stays put
    let form = state.auth.password_form_mut().unwrap();
    form.new_password = "abcdefgh".to_string();
    form.confirm_password = "abcdefgh".to_string();
    assert!(state.auth.submit_new_password().await.is_err());
    assert!(matches!(
        state.auth.stage(),
        AuthStage::ChangePassword { .. }
    ));

    let form = state.auth.password_form_mut().unwrap();
    form.new_password = "Abc123!9".to_string();
    form.confirm_password = "Abc123!9".to_string();
    state.auth.submit_new_password().await?;
    assert!(matches!(state.auth.stage(), AuthStage::SignIn { .. }));

    Ok(())
}

/// Test that resend is refused during the cooldown and allowed after it
#[tokio::test]
async fn test_resend_cooldown() -> Result<()> {
    let backend = Arc::new(MockBackend::new(LatencyProfile::instant()));

    let mut auth = AuthFlowService::new(backend.clone(), 60);
    auth.start_password_reset()?;
    auth.set_reset_email("admin@lockerai.com")?;
    auth.request_reset().await?;
    let err = auth.resend_code().await.unwrap_err();
    assert!(err.to_string().contains("resend available"));

    let mut auth = AuthFlowService::new(backend, 0);
    auth.start_password_reset()?;
    auth.set_reset_email("admin@lockerai.com")?;
    auth.request_reset().await?;
    auth.resend_code().await?;

    Ok(())
}
