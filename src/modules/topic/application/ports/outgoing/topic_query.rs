use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::Owned;

/// Persisted topic as read back from storage
#[derive(Debug, Clone, PartialEq)]
pub struct TopicView {
    pub id: Uuid,
    pub owner: UserId,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

impl Owned for TopicView {
    fn owner(&self) -> UserId {
        self.owner
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Every topic, newest first.
    async fn list_all(&self) -> Result<Vec<TopicView>, TopicQueryError>;

    /// Topics owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<TopicView>, TopicQueryError>;

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<TopicView>, TopicQueryError>;
}
