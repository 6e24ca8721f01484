use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEntryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteEntryUseCase: Send + Sync {
    /// Returns the id of the topic the entry belonged to.
    async fn execute(&self, requester: UserId, entry_id: Uuid) -> Result<Uuid, DeleteEntryError>;
}
