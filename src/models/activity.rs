//! Audit trail models.

use chrono::{DateTime, Utc};
use locker_listing::ListRecord;
use serde::{Deserialize, Serialize};

/// Kind of event recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ContractSigned,
    UserJoined,
    ContractExpiring,
    BrandJoined,
    ContractEnded,
    LoginFailed,
    PasswordChanged,
    EmailSent,
    ContractModified,
    UserSuspended,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::ContractSigned => "contract_signed",
            ActivityKind::UserJoined => "user_joined",
            ActivityKind::ContractExpiring => "contract_expiring",
            ActivityKind::BrandJoined => "brand_joined",
            ActivityKind::ContractEnded => "contract_ended",
            ActivityKind::LoginFailed => "login_failed",
            ActivityKind::PasswordChanged => "password_changed",
            ActivityKind::EmailSent => "email_sent",
            ActivityKind::ContractModified => "contract_modified",
            ActivityKind::UserSuspended => "user_suspended",
        }
    }

    /// Accepts the dashboard feed's "contract_ending" spelling as well.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "contract_signed" => Some(ActivityKind::ContractSigned),
            "user_joined" => Some(ActivityKind::UserJoined),
            "contract_expiring" | "contract_ending" => Some(ActivityKind::ContractExpiring),
            "brand_joined" => Some(ActivityKind::BrandJoined),
            "contract_ended" => Some(ActivityKind::ContractEnded),
            "login_failed" => Some(ActivityKind::LoginFailed),
            "password_changed" => Some(ActivityKind::PasswordChanged),
            "email_sent" => Some(ActivityKind::EmailSent),
            "contract_modified" => Some(ActivityKind::ContractModified),
            "user_suspended" => Some(ActivityKind::UserSuspended),
            _ => None,
        }
    }
}

/// Who performed the recorded action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorCategory {
    Admin,
    User,
    Brand,
}

impl ActorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorCategory::Admin => "admin",
            ActorCategory::User => "user",
            ActorCategory::Brand => "brand",
        }
    }
}

/// Severity bucket used by the stats cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSeverity {
    Info,
    Warning,
    Error,
}

impl LogSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSeverity::Info => "info",
            LogSeverity::Warning => "warning",
            LogSeverity::Error => "error",
        }
    }
}

/// One entry in the audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ActivityLogEntry {
    pub id: u64,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Display name of the actor, or an email for failed logins
    pub user: String,
    pub user_type: ActorCategory,
    pub severity: LogSeverity,
    pub timestamp: DateTime<Utc>,
    /// "system" for events without a client address
    pub ip_address: String,
    pub related_entity: Option<String>,
}

impl ListRecord for ActivityLogEntry {
    type Category = ActivityKind;

    fn id(&self) -> u64 {
        self.id
    }

    fn matches_query(&self, needle: &str) -> bool {
        locker_listing::contains_ci(&self.title, needle)
            || locker_listing::contains_ci(&self.description, needle)
            || locker_listing::contains_ci(&self.user, needle)
    }

    fn category(&self) -> Self::Category {
        self.kind
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }
}
