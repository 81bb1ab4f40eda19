//! Support email models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery priority of a support email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl EmailPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailPriority::Low => "low",
            EmailPriority::Normal => "normal",
            EmailPriority::High => "high",
            EmailPriority::Urgent => "urgent",
        }
    }
}

impl Default for EmailPriority {
    fn default() -> Self {
        EmailPriority::Normal
    }
}

/// Delivery status shown in the history table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Sent,
}

impl EmailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Sent => "sent",
        }
    }
}

/// Audience selector for an outgoing email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientMode {
    /// Hand-picked accounts
    Specific,
    /// Every account on the platform
    All,
    /// Every athlete account
    Athletes,
    /// Every brand account
    Brands,
}

impl RecipientMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientMode::Specific => "specific",
            RecipientMode::All => "all",
            RecipientMode::Athletes => "athletes",
            RecipientMode::Brands => "brands",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "specific" => Some(RecipientMode::Specific),
            "all" => Some(RecipientMode::All),
            "athletes" => Some(RecipientMode::Athletes),
            "brands" => Some(RecipientMode::Brands),
            _ => None,
        }
    }
}

impl Default for RecipientMode {
    fn default() -> Self {
        RecipientMode::Specific
    }
}

/// A sent email as shown in the history table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EmailRecord {
    pub id: u64,
    pub subject: String,
    /// Resolved audience label ("All Users", "John Doe, Sarah Wilson")
    pub recipients: String,
    pub sent_date: NaiveDate,
    pub status: EmailStatus,
}

/// A canned message the compose form can load
#[derive(Debug, Clone, Copy)]
pub struct EmailTemplate {
    pub name: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
}
