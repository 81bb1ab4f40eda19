//! Conversation monitoring service.
//!
//! Backs the chat oversight page: the searchable conversation list,
//! the header counters and the transcript viewer. Transcripts are
//! fetched on demand when the operator opens a conversation.

use std::sync::Arc;

use locker_listing::ListState;
use tracing::info;

use crate::error::Result;
use crate::models::{ChatMessage, Conversation, ConversationStatus};
use crate::services::backend::AdminBackend;

/// Transcript viewer state.
#[derive(Debug, Clone, Default)]
pub enum ChatModal {
    #[default]
    Closed,
    View {
        conversation_id: u64,
        transcript: Vec<ChatMessage>,
    },
}

/// Header counters for the chat page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatStats {
    pub total: usize,
    pub active: usize,
}

pub struct ChatService {
    backend: Arc<dyn AdminBackend>,
    list: ListState<Conversation>,
    modal: ChatModal,
}

impl ChatService {
    pub fn new(backend: Arc<dyn AdminBackend>, page_size: usize) -> Self {
        Self {
            backend,
            list: ListState::new(page_size),
            modal: ChatModal::Closed,
        }
    }

    /// Fetch all conversations and replace the list.
    pub async fn load(&mut self) -> Result<()> {
        let conversations = self.backend.fetch_conversations().await?;
        info!(count = conversations.len(), "conversations loaded");
        self.list.set_records(conversations);
        Ok(())
    }

    /// Re-fetch, keeping the current filters.
    pub async fn refresh(&mut self) -> Result<()> {
        self.load().await
    }

    pub fn list(&self) -> &ListState<Conversation> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState<Conversation> {
        &mut self.list
    }

    pub fn modal(&self) -> &ChatModal {
        &self.modal
    }

    pub fn stats(&self) -> ChatStats {
        let records = self.list.records();
        ChatStats {
            total: records.len(),
            active: records
                .iter()
                .filter(|c| c.status == ConversationStatus::Active)
                .count(),
        }
    }

    /// Fetch the transcript and open the viewer. The viewer stays
    /// closed when the conversation is unknown.
    pub async fn open_conversation(&mut self, conversation_id: u64) -> Result<()> {
        let transcript = self.backend.fetch_transcript(conversation_id).await?;
        info!(
            conversation_id,
            messages = transcript.len(),
            "transcript opened"
        );
        self.modal = ChatModal::View {
            conversation_id,
            transcript,
        };
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal = ChatModal::Closed;
    }
}
