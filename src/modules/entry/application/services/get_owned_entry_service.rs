use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::{OwnershipPolicy, RecordAction};
use crate::entry::application::ports::incoming::use_cases::{
    GetOwnedEntryError, GetOwnedEntryUseCase,
};
use crate::entry::application::ports::outgoing::{EntryQuery, EntryView};

#[derive(Debug, Clone)]
pub struct GetOwnedEntryService<Q>
where
    Q: EntryQuery,
{
    query: Q,
}

impl<Q> GetOwnedEntryService<Q>
where
    Q: EntryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOwnedEntryUseCase for GetOwnedEntryService<Q>
where
    Q: EntryQuery,
{
    async fn execute(
        &self,
        requester: UserId,
        entry_id: Uuid,
    ) -> Result<EntryView, GetOwnedEntryError> {
        let found = self
            .query
            .find_by_id(entry_id)
            .await
            .map_err(|e| GetOwnedEntryError::QueryFailed(e.to_string()))?;

        OwnershipPolicy::authorize(requester, RecordAction::Edit, found)
            .map_err(|_| GetOwnedEntryError::NotFound)
    }
}
