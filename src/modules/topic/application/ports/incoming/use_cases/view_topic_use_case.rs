use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::outgoing::EntryView;
use crate::topic::application::ports::outgoing::TopicView;

/// A topic with its entries, oldest entry first.
#[derive(Debug, Clone)]
pub struct TopicDetail {
    pub topic: TopicView,
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ViewTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ViewTopicUseCase: Send + Sync {
    async fn execute(&self, requester: UserId, topic_id: Uuid)
        -> Result<TopicDetail, ViewTopicError>;
}
