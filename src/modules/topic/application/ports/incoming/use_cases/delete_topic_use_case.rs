use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete; the topic's entries go with it.
#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, requester: UserId, topic_id: Uuid) -> Result<(), DeleteTopicError>;
}
