use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::EntryForm;
use crate::entry::application::ports::outgoing::EntryView;
use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Create Entry Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateEntryCommand {
    owner: UserId,
    topic_id: Uuid,
    text: String,
}

impl CreateEntryCommand {
    pub fn new(owner: UserId, topic_id: Uuid, form: &EntryForm) -> Result<Self, FieldErrors> {
        let text = form.validate()?;
        Ok(Self {
            owner,
            topic_id,
            text,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEntryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    async fn execute(&self, command: CreateEntryCommand) -> Result<EntryView, CreateEntryError>;
}
