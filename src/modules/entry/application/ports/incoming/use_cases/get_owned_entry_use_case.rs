use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::outgoing::EntryView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOwnedEntryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetOwnedEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        entry_id: Uuid,
    ) -> Result<EntryView, GetOwnedEntryError>;
}
