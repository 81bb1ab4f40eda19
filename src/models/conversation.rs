//! Brand-athlete conversation models.

use chrono::NaiveDate;
use locker_listing::ListRecord;
use serde::{Deserialize, Serialize};

/// Conversation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    Active,
    Pending,
    Completed,
    Inactive,
}

impl ConversationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStatus::Active => "active",
            ConversationStatus::Pending => "pending",
            ConversationStatus::Completed => "completed",
            ConversationStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ConversationStatus::Active),
            "pending" => Some(ConversationStatus::Pending),
            "completed" => Some(ConversationStatus::Completed),
            "inactive" => Some(ConversationStatus::Inactive),
            _ => None,
        }
    }
}

/// Negotiation priority assigned by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationPriority {
    High,
    Medium,
    Low,
}

impl ConversationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationPriority::High => "high",
            ConversationPriority::Medium => "medium",
            ConversationPriority::Low => "low",
        }
    }
}

/// Brand side of a conversation, denormalized for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BrandSummary {
    pub name: String,
    /// Two-letter monogram shown in place of a real avatar
    pub avatar: String,
    pub email: String,
}

/// Athlete side of a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AthleteSummary {
    pub name: String,
    pub avatar: String,
    pub email: String,
    pub sport: String,
}

/// A monitored negotiation thread between a brand and an athlete
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Conversation {
    pub id: u64,
    pub brand: BrandSummary,
    pub athlete: AthleteSummary,
    pub last_message: String,
    /// Relative label as the platform reported it ("2 hours ago")
    pub last_message_time: String,
    pub status: ConversationStatus,
    pub unread_count: u32,
    pub total_messages: u32,
    pub start_date: NaiveDate,
    /// Display string including currency symbol ("$125,000")
    pub contract_value: String,
    pub priority: ConversationPriority,
}

impl ListRecord for Conversation {
    type Category = ConversationStatus;

    fn id(&self) -> u64 {
        self.id
    }

    fn matches_query(&self, needle: &str) -> bool {
        locker_listing::contains_ci(&self.brand.name, needle)
            || locker_listing::contains_ci(&self.athlete.name, needle)
    }

    fn category(&self) -> Self::Category {
        self.status
    }
}

/// Which side of the thread authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    Brand,
    Athlete,
}

/// Message payload kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    File { file_name: String },
}

/// One message in a conversation transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChatMessage {
    pub id: u64,
    pub sender: MessageSender,
    pub message: String,
    /// Display timestamp as the platform formats it ("2024-01-15 10:30 AM")
    pub timestamp: String,
    pub kind: MessageKind,
}
