use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::entry::application::ports::incoming::use_cases::{
    EditEntryCommand, EditEntryError, EditEntryUseCase,
};
use crate::entry::application::ports::outgoing::{
    EntryQuery, EntryRepository, EntryRepositoryError, EntryView,
};

#[derive(Debug, Clone)]
pub struct EditEntryService<Q, R>
where
    Q: EntryQuery,
    R: EntryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> EditEntryService<Q, R>
where
    Q: EntryQuery,
    R: EntryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> EditEntryUseCase for EditEntryService<Q, R>
where
    Q: EntryQuery,
    R: EntryRepository,
{
    async fn execute(&self, command: EditEntryCommand) -> Result<EntryView, EditEntryError> {
        let found = self
            .query
            .find_by_id(command.entry_id())
            .await
            .map_err(|e| EditEntryError::RepositoryError(e.to_string()))?;

        let entry = OwnershipPolicy::authorize(command.requester(), RecordAction::Edit, found)
            .map_err(|_| {
                info!(entry_id = %command.entry_id(), "Edit refused for entry");
                EditEntryError::NotFound
            })?;

        self.repository
            .update_entry_text(entry.owner, entry.id, command.text().to_string())
            .await
            .map_err(|e| match e {
                EntryRepositoryError::NotFound => EditEntryError::NotFound,
                EntryRepositoryError::DatabaseError(msg) => EditEntryError::RepositoryError(msg),
            })
    }
}
