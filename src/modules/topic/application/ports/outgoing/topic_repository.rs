use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::TopicView;

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    /// No row matched both the id and the owner.
    #[error("Topic not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes are always scoped to `owner`, so a stale ownership check can
/// never touch another user's row.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError>;

    async fn update_topic_text(
        &self,
        owner: UserId,
        topic_id: Uuid,
        text: String,
    ) -> Result<TopicView, TopicRepositoryError>;

    /// Removes the topic together with its entries.
    async fn delete_topic(&self, owner: UserId, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
