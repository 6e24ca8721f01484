use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::FieldErrors;
use crate::topic::application::domain::TopicForm;
use crate::topic::application::ports::outgoing::TopicView;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

/// The owner always comes from the authenticated caller.
#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    owner: UserId,
    text: String,
}

impl CreateTopicCommand {
    pub fn new(owner: UserId, form: &TopicForm) -> Result<Self, FieldErrors> {
        let text = form.validate()?;
        Ok(Self { owner, text })
    }

    pub fn owner(&self) -> UserId {
        self.owner
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
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicView, CreateTopicError>;
}
