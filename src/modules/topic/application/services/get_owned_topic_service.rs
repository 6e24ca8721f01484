use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::topic::application::ports::incoming::use_cases::{
    GetOwnedTopicError, GetOwnedTopicUseCase,
};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicView};

#[derive(Debug, Clone)]
pub struct GetOwnedTopicService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> GetOwnedTopicService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOwnedTopicUseCase for GetOwnedTopicService<Q>
where
    Q: TopicQuery,
{
    async fn execute(
        &self,
        requester: UserId,
        topic_id: Uuid,
    ) -> Result<TopicView, GetOwnedTopicError> {
        let found = self
            .query
            .find_by_id(topic_id)
            .await
            .map_err(|e| GetOwnedTopicError::QueryFailed(e.to_string()))?;

        OwnershipPolicy::authorize(requester, RecordAction::Edit, found)
            .map_err(|_| GetOwnedTopicError::NotFound)
    }
}
