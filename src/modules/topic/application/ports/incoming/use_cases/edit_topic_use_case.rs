use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::FieldErrors;
use crate::topic::application::domain::TopicForm;
use crate::topic::application::ports::outgoing::TopicView;

//
// ──────────────────────────────────────────────────────────
// Edit Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct EditTopicCommand {
    requester: UserId,
    topic_id: Uuid,
    text: String,
}

impl EditTopicCommand {
    pub fn new(requester: UserId, topic_id: Uuid, form: &TopicForm) -> Result<Self, FieldErrors> {
        let text = form.validate()?;
        Ok(Self {
            requester,
            topic_id,
            text,
        })
    }

    pub fn requester(&self) -> UserId {
        self.requester
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
pub enum EditTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EditTopicUseCase: Send + Sync {
    async fn execute(&self, command: EditTopicCommand) -> Result<TopicView, EditTopicError>;
}
