use async_trait::async_trait;

use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryCommand, CreateEntryError, CreateEntryUseCase,
};
use crate::entry::application::ports::outgoing::{CreateEntryData, EntryRepository, EntryView};
use crate::topic::application::ports::outgoing::TopicQuery;

/// Any authenticated user may add an entry to any existing topic.
#[derive(Debug, Clone)]
pub struct CreateEntryService<T, R>
where
    T: TopicQuery,
    R: EntryRepository,
{
    topics: T,
    repository: R,
}

impl<T, R> CreateEntryService<T, R>
where
    T: TopicQuery,
    R: EntryRepository,
{
    pub fn new(topics: T, repository: R) -> Self {
        Self { topics, repository }
    }
}

#[async_trait]
impl<T, R> CreateEntryUseCase for CreateEntryService<T, R>
where
    T: TopicQuery,
    R: EntryRepository,
{
    async fn execute(&self, command: CreateEntryCommand) -> Result<EntryView, CreateEntryError> {
        let found = self
            .topics
            .find_by_id(command.topic_id())
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))?;

        let topic = OwnershipPolicy::authorize(command.owner(), RecordAction::View, found)
            .map_err(|_| CreateEntryError::TopicNotFound)?;

        self.repository
            .create_entry(CreateEntryData {
                topic_id: topic.id,
                owner: command.owner(),
                text: command.text().to_string(),
            })
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))
    }
}
