use async_trait::async_trait;

use crate::topic::application::ports::incoming::use_cases::{ListTopicsError, ListTopicsUseCase};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicView};

#[derive(Debug, Clone)]
pub struct ListTopicsService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery,
{
    async fn execute(&self) -> Result<Vec<TopicView>, ListTopicsError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))
    }
}
