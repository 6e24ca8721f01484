use async_trait::async_trait;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{CreateTopicData, TopicRepository, TopicView};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicView, CreateTopicError> {
        self.repository
            .create_topic(CreateTopicData {
                owner: command.owner(),
                text: command.text().to_string(),
            })
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
