use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::topic::application::ports::incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase};
use crate::topic::application::ports::outgoing::{
    TopicQuery, TopicRepository, TopicRepositoryError,
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteTopicUseCase for DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    async fn execute(&self, requester: UserId, topic_id: Uuid) -> Result<(), DeleteTopicError> {
        let found = self
            .query
            .find_by_id(topic_id)
            .await
            .map_err(|e| DeleteTopicError::RepositoryError(e.to_string()))?;

        let topic = OwnershipPolicy::authorize(requester, RecordAction::Delete, found)
            .map_err(|_| DeleteTopicError::NotFound)?;

        self.repository
            .delete_topic(topic.owner, topic.id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => DeleteTopicError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => DeleteTopicError::RepositoryError(msg),
            })?;

        info!(topic_id = %topic.id, "Topic deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::memory_store::InMemoryStore;
    use crate::tests::support::new_user;
    use crate::topic::application::ports::outgoing::{CreateTopicData, TopicView};
    use mockall::mock;

    mock! {
        pub TopicRepositoryMock {}

        #[async_trait]
        impl TopicRepository for TopicRepositoryMock {
            async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError>;
            async fn update_topic_text(&self, owner: UserId, topic_id: Uuid, text: String) -> Result<TopicView, TopicRepositoryError>;
            async fn delete_topic(&self, owner: UserId, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
        }
    }

    #[tokio::test]
    async fn owner_deletes_topic_and_its_entries() {
        let store = InMemoryStore::new();
        let alice = new_user();
        let bob = new_user();
        let doomed = store.insert_topic(alice, "Algebra");
        let kept = store.insert_topic(alice, "Topology");
        store.insert_entry(doomed.id, alice, "groups");
        store.insert_entry(doomed.id, bob, "rings");
        let survivor = store.insert_entry(kept.id, alice, "open sets");

        DeleteTopicService::new(store.clone(), store.clone())
            .execute(alice, doomed.id)
            .await
            .unwrap();

        assert_eq!(store.topics(), vec![kept]);
        assert_eq!(store.entries(), vec![survivor]);
    }

    #[tokio::test]
    async fn non_owner_never_reaches_the_repository() {
        let store = InMemoryStore::new();
        let topic = store.insert_topic(new_user(), "Algebra");

        let mut repository = MockTopicRepositoryMock::new();
        repository.expect_delete_topic().times(0);

        let result = DeleteTopicService::new(store.clone(), repository)
            .execute(new_user(), topic.id)
            .await;

        assert!(matches!(result, Err(DeleteTopicError::NotFound)));
        assert_eq!(store.topics().len(), 1);
    }

    #[tokio::test]
    async fn missing_topic_is_not_found() {
        let store = InMemoryStore::new();

        let result = DeleteTopicService::new(store.clone(), store)
            .execute(new_user(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DeleteTopicError::NotFound)));
    }
}
