//! Support email service.
//!
//! Backs the email composer page: audience selection (everyone, all
//! athletes, all brands, or hand-picked accounts), canned templates,
//! delivery through the backend and the sent history. Hand-picked
//! selection only applies in specific mode; switching audience clears
//! it.

use std::sync::Arc;

use locker_listing::contains_ci;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{
    self, EmailPriority, EmailRecord, EmailStatus, EmailTemplate, RecipientMode, User,
};
use crate::services::backend::AdminBackend;

/// Canned messages the compose form can load by name.
pub const TEMPLATES: [EmailTemplate; 3] = [
    EmailTemplate {
        name: "Welcome Message",
        subject: "Welcome to LockerAI Platform",
        message: "Welcome to LockerAI! We're excited to have you on our platform. Here's \
                  everything you need to know to get started...",
    },
    EmailTemplate {
        name: "Contract Reminder",
        subject: "Contract Renewal Reminder",
        message: "This is a friendly reminder that your contract is approaching its renewal \
                  date. Please review the terms and contact us if you have any questions...",
    },
    EmailTemplate {
        name: "Platform Update",
        subject: "Important Platform Updates",
        message: "We've made some exciting updates to the platform that will enhance your \
                  experience. Here's what's new...",
    },
];

/// Compose form state.
#[derive(Debug, Clone)]
pub struct EmailForm {
    pub mode: RecipientMode,
    /// Account ids picked in specific mode.
    pub selected: Vec<u64>,
    pub priority: EmailPriority,
    pub subject: String,
    pub message: String,
}

impl Default for EmailForm {
    fn default() -> Self {
        Self {
            mode: RecipientMode::Specific,
            selected: Vec::new(),
            priority: EmailPriority::Normal,
            subject: String::new(),
            message: String::new(),
        }
    }
}

pub struct SupportEmailService {
    backend: Arc<dyn AdminBackend>,
    /// Accounts offered in the recipient picker.
    users: Vec<User>,
    user_search: String,
    form: EmailForm,
    /// Sent emails, newest first.
    history: Vec<EmailRecord>,
    next_id: u64,
}

impl SupportEmailService {
    pub fn new(backend: Arc<dyn AdminBackend>) -> Self {
        Self {
            backend,
            users: Vec::new(),
            user_search: String::new(),
            form: EmailForm::default(),
            history: Vec::new(),
            next_id: 1,
        }
    }

    /// Fetch the recipient picker accounts and the sent history.
    pub async fn load(&mut self) -> Result<()> {
        self.users = self.backend.fetch_users().await?;
        self.history = self.backend.fetch_email_history().await?;
        self.next_id = self.history.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        info!(
            users = self.users.len(),
            history = self.history.len(),
            "support email page loaded"
        );
        Ok(())
    }

    pub fn form(&self) -> &EmailForm {
        &self.form
    }

    // ---- compose form ----

    /// Change the audience. Any hand-picked selection is dropped.
    pub fn set_mode(&mut self, mode: RecipientMode) {
        if self.form.mode != mode {
            self.form.mode = mode;
            self.form.selected.clear();
        }
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.form.subject = subject.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.message = message.into();
    }

    pub fn set_priority(&mut self, priority: EmailPriority) {
        self.form.priority = priority;
    }

    /// Copy a canned template into the subject and message fields.
    pub fn load_template(&mut self, name: &str) -> Result<()> {
        let template = TEMPLATES
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::NotFound(format!("template {:?}", name)))?;
        self.form.subject = template.subject.to_string();
        self.form.message = template.message.to_string();
        Ok(())
    }

    // ---- recipient picker ----

    pub fn set_user_search(&mut self, search: impl Into<String>) {
        self.user_search = search.into();
    }

    /// Accounts matching the picker's search box.
    pub fn visible_users(&self) -> Vec<&User> {
        let needle = self.user_search.trim().to_lowercase();
        self.users
            .iter()
            .filter(|u| contains_ci(&u.name, &needle) || contains_ci(&u.email, &needle))
            .collect()
    }

    /// Add or remove an account from the hand-picked selection.
    pub fn toggle_user(&mut self, id: u64) -> Result<()> {
        if self.form.mode != RecipientMode::Specific {
            return Err(Error::Validation(
                "recipients can only be picked in specific mode".to_string(),
            ));
        }
        if !self.users.iter().any(|u| u.id == id) {
            return Err(Error::NotFound(format!("user {}", id)));
        }

        match self.form.selected.iter().position(|s| *s == id) {
            Some(index) => {
                self.form.selected.remove(index);
            }
            None => self.form.selected.push(id),
        }
        Ok(())
    }

    /// Audience label for the preview line and the history record.
    pub fn resolved_recipients(&self) -> String {
        match self.form.mode {
            RecipientMode::All => "All Users".to_string(),
            RecipientMode::Athletes => "All Athletes".to_string(),
            RecipientMode::Brands => "All Brands".to_string(),
            RecipientMode::Specific => {
                let names: Vec<&str> = self
                    .users
                    .iter()
                    .filter(|u| self.form.selected.contains(&u.id))
                    .map(|u| u.name.as_str())
                    .collect();
                if names.is_empty() {
                    "No users selected".to_string()
                } else {
                    names.join(", ")
                }
            }
        }
    }

    /// Whether the send button is enabled for the current draft.
    pub fn can_send(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> Result<()> {
        if self.form.subject.trim().is_empty() {
            return Err(Error::Validation("subject is required".to_string()));
        }
        if self.form.message.trim().is_empty() {
            return Err(Error::Validation("message is required".to_string()));
        }
        if self.form.mode == RecipientMode::Specific && self.form.selected.is_empty() {
            return Err(Error::Validation(
                "pick at least one recipient".to_string(),
            ));
        }
        Ok(())
    }

    // ---- delivery ----

    /// Deliver the drafted email, record it in the history and reset
    /// the form. The draft is kept when validation or delivery fails.
    pub async fn send(&mut self) -> Result<()> {
        if let Err(err) = self.validate() {
            warn!(%err, "send rejected");
            return Err(err);
        }

        let record = EmailRecord {
            id: self.next_id,
            subject: self.form.subject.clone(),
            recipients: self.resolved_recipients(),
            sent_date: models::today(),
            status: EmailStatus::Sent,
        };
        let stored = self.backend.send_support_email(record).await?;

        info!(id = stored.id, recipients = %stored.recipients, "support email sent");
        self.history.insert(0, stored);
        self.next_id += 1;
        self.form = EmailForm::default();
        Ok(())
    }

    /// Reset the form without sending.
    pub fn clear(&mut self) {
        self.form = EmailForm::default();
    }

    // ---- history ----

    pub fn history(&self) -> &[EmailRecord] {
        &self.history
    }

    /// The newest `n` sent emails, for the history card.
    pub fn recent(&self, n: usize) -> &[EmailRecord] {
        &self.history[..n.min(self.history.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_unique_by_name() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
