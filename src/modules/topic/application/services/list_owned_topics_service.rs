use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::incoming::use_cases::{
    ListOwnedTopicsError, ListOwnedTopicsUseCase,
};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicView};

#[derive(Debug, Clone)]
pub struct ListOwnedTopicsService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> ListOwnedTopicsService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListOwnedTopicsUseCase for ListOwnedTopicsService<Q>
where
    Q: TopicQuery,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<TopicView>, ListOwnedTopicsError> {
        self.query
            .list_by_owner(owner)
            .await
            .map_err(|e| ListOwnedTopicsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::memory_store::InMemoryStore;
    use crate::tests::support::new_user;

    #[tokio::test]
    async fn returns_exactly_the_owners_topics_newest_first() {
        let store = InMemoryStore::new();
        let alice = new_user();
        let bob = new_user();
        store.insert_topic(alice, "Algebra");
        store.insert_topic(bob, "Topology");
        store.insert_topic(alice, "Calculus");

        let topics = ListOwnedTopicsService::new(store).execute(alice).await.unwrap();

        assert!(topics.iter().all(|t| t.owner == alice));
        let texts: Vec<_> = topics.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Calculus", "Algebra"]);
    }

    #[tokio::test]
    async fn user_without_topics_gets_empty_list() {
        let store = InMemoryStore::new();
        store.insert_topic(new_user(), "Algebra");

        let topics = ListOwnedTopicsService::new(store)
            .execute(new_user())
            .await
            .unwrap();

        assert!(topics.is_empty());
    }
}
