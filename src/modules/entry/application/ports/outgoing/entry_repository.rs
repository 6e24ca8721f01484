use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::EntryView;

#[derive(Debug, Clone)]
pub struct CreateEntryData {
    pub topic_id: Uuid,
    pub owner: UserId,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryRepositoryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Updates and deletes only match rows owned by `owner`.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, data: CreateEntryData) -> Result<EntryView, EntryRepositoryError>;

    async fn update_entry_text(
        &self,
        owner: UserId,
        entry_id: Uuid,
        text: String,
    ) -> Result<EntryView, EntryRepositoryError>;

    async fn delete_entry(&self, owner: UserId, entry_id: Uuid) -> Result<(), EntryRepositoryError>;
}
