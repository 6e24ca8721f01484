use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListOwnedTopicsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListOwnedTopicsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<TopicView>, ListOwnedTopicsError>;
}
