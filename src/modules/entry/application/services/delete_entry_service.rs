use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::entry::application::ports::incoming::use_cases::{DeleteEntryError, DeleteEntryUseCase};
use crate::entry::application::ports::outgoing::{
    EntryQuery, EntryRepository, EntryRepositoryError,
};

#[derive(Debug, Clone)]
pub struct DeleteEntryService<Q, R>
where
    Q: EntryQuery,
    R: EntryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteEntryService<Q, R>
where
    Q: EntryQuery,
    R: EntryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteEntryUseCase for DeleteEntryService<Q, R>
where
    Q: EntryQuery,
    R: EntryRepository,
{
    async fn execute(&self, requester: UserId, entry_id: Uuid) -> Result<Uuid, DeleteEntryError> {
        let found = self
            .query
            .find_by_id(entry_id)
            .await
            .map_err(|e| DeleteEntryError::RepositoryError(e.to_string()))?;

        let entry = OwnershipPolicy::authorize(requester, RecordAction::Delete, found)
            .map_err(|_| DeleteEntryError::NotFound)?;

        self.repository
            .delete_entry(entry.owner, entry.id)
            .await
            .map_err(|e| match e {
                EntryRepositoryError::NotFound => DeleteEntryError::NotFound,
                EntryRepositoryError::DatabaseError(msg) => DeleteEntryError::RepositoryError(msg),
            })?;

        Ok(entry.topic_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::memory_store::InMemoryStore;
    use crate::tests::support::new_user;

    #[tokio::test]
    async fn author_deletes_entry_and_gets_its_topic_back() {
        let store = InMemoryStore::new();
        let alice = new_user();
        let topic = store.insert_topic(alice, "Algebra");
        let doomed = store.insert_entry(topic.id, alice, "groups");
        let kept = store.insert_entry(topic.id, alice, "rings");

        let topic_id = DeleteEntryService::new(store.clone(), store.clone())
            .execute(alice, doomed.id)
            .await
            .unwrap();

        assert_eq!(topic_id, topic.id);
        assert_eq!(store.entries(), vec![kept]);
        assert_eq!(store.topics().len(), 1);
    }

    #[tokio::test]
    async fn non_author_gets_not_found_and_entry_survives() {
        let store = InMemoryStore::new();
        let alice = new_user();
        let topic = store.insert_topic(alice, "Algebra");
        let entry = store.insert_entry(topic.id, alice, "groups");

        let result = DeleteEntryService::new(store.clone(), store.clone())
            .execute(new_user(), entry.id)
            .await;

        assert!(matches!(result, Err(DeleteEntryError::NotFound)));
        assert_eq!(store.entries(), vec![entry]);
    }
}
