use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// All topics regardless of owner, newest first.
#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TopicView>, ListTopicsError>;
}
