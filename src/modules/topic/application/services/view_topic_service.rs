use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::entry::application::ports::outgoing::EntryQuery;
use crate::topic::application::ports::incoming::use_cases::{
    TopicDetail, ViewTopicError, ViewTopicUseCase,
};
use crate::topic::application::ports::outgoing::TopicQuery;

#[derive(Debug, Clone)]
pub struct ViewTopicService<Q, E>
where
    Q: TopicQuery,
    E: EntryQuery,
{
    topics: Q,
    entries: E,
}

impl<Q, E> ViewTopicService<Q, E>
where
    Q: TopicQuery,
    E: EntryQuery,
{
    pub fn new(topics: Q, entries: E) -> Self {
        Self { topics, entries }
    }
}

#[async_trait]
impl<Q, E> ViewTopicUseCase for ViewTopicService<Q, E>
where
    Q: TopicQuery,
    E: EntryQuery,
{
    async fn execute(
        &self,
        requester: UserId,
        topic_id: Uuid,
    ) -> Result<TopicDetail, ViewTopicError> {
        let found = self
            .topics
            .find_by_id(topic_id)
            .await
            .map_err(|e| ViewTopicError::QueryFailed(e.to_string()))?;

        let topic = OwnershipPolicy::authorize(requester, RecordAction::View, found)
            .map_err(|_| ViewTopicError::NotFound)?;

        let entries = self
            .entries
            .list_for_topic(topic.id)
            .await
            .map_err(|e| ViewTopicError::QueryFailed(e.to_string()))?;

        Ok(TopicDetail { topic, entries })
    }
}
