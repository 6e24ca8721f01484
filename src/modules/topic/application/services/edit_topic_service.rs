use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::topic::application::ports::incoming::use_cases::{
    EditTopicCommand, EditTopicError, EditTopicUseCase,
};
use crate::topic::application::ports::outgoing::{
    TopicQuery, TopicRepository, TopicRepositoryError, TopicView,
};

#[derive(Debug, Clone)]
pub struct EditTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> EditTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> EditTopicUseCase for EditTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    async fn execute(&self, command: EditTopicCommand) -> Result<TopicView, EditTopicError> {
        let found = self
            .query
            .find_by_id(command.topic_id())
            .await
            .map_err(|e| EditTopicError::RepositoryError(e.to_string()))?;

        let topic = OwnershipPolicy::authorize(command.requester(), RecordAction::Edit, found)
            .map_err(|_| {
                info!(topic_id = %command.topic_id(), "Edit refused for topic");
                EditTopicError::NotFound
            })?;

        self.repository
            .update_topic_text(topic.owner, topic.id, command.text().to_string())
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => EditTopicError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => EditTopicError::RepositoryError(msg),
            })
    }
}
