use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOwnedTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Loads a topic for its owner; backs the edit form and the delete
/// confirmation.
#[async_trait]
pub trait GetOwnedTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        topic_id: Uuid,
    ) -> Result<TopicView, GetOwnedTopicError>;
}
