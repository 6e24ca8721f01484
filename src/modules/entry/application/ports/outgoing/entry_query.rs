use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::ownership::Owned;

#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub owner: UserId,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

impl Owned for EntryView {
    fn owner(&self) -> UserId {
        self.owner
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EntryQuery: Send + Sync {
    /// Entries of one topic, oldest first.
    async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<EntryView>, EntryQueryError>;

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<EntryView>, EntryQueryError>;
}
