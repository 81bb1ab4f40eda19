//! Backend abstraction for the admin engine.
//!
//! Every page service talks to the platform through the `AdminBackend`
//! trait, which defines the fetches the pages make on mount plus the
//! mutating calls of the email composer and the auth flow. The only
//! implementation today is `MockBackend`, which serves canned records
//! after a configurable delay so the engine behaves like it is talking
//! to a slow network.

mod mock;

pub use mock::{LatencyProfile, MockBackend};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    ActivityLogEntry, ChatMessage, Contract, Conversation, DashboardSnapshot, EmailRecord, User,
};

/// Data source behind the admin pages.
///
/// Fetches return full record sets; filtering and pagination happen in
/// the page services. Mutations return the stored record so callers can
/// merge it into local state.
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// All platform accounts.
    async fn fetch_users(&self) -> Result<Vec<User>>;

    /// All sponsorship contracts.
    async fn fetch_contracts(&self) -> Result<Vec<Contract>>;

    /// All monitored conversations, without their transcripts.
    async fn fetch_conversations(&self) -> Result<Vec<Conversation>>;

    /// Full transcript of one conversation.
    ///
    /// Errors with `NotFound` when the id is unknown.
    async fn fetch_transcript(&self, conversation_id: u64) -> Result<Vec<ChatMessage>>;

    /// The complete audit trail, newest first.
    async fn fetch_activity_log(&self) -> Result<Vec<ActivityLogEntry>>;

    /// Previously sent support emails, newest first.
    async fn fetch_email_history(&self) -> Result<Vec<EmailRecord>>;

    /// Counters and recent activity for the overview page.
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot>;

    /// Deliver a support email. Returns the record as stored.
    async fn send_support_email(&self, record: EmailRecord) -> Result<EmailRecord>;

    /// Authenticate an admin account.
    async fn sign_in(&self, email: &str, password: &str) -> Result<()>;

    /// Email a verification code to the account.
    async fn request_reset_code(&self, email: &str) -> Result<()>;

    /// Check a verification code entered by the operator.
    async fn verify_code(&self, email: &str, code: &str) -> Result<()>;

    /// Store a new password after a verified reset.
    async fn update_password(&self, email: &str, new_password: &str) -> Result<()>;
}
