use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::domain::EntryForm;
use crate::entry::application::ports::outgoing::EntryView;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub struct EditEntryCommand {
    requester: UserId,
    entry_id: Uuid,
    text: String,
}

impl EditEntryCommand {
    pub fn new(requester: UserId, entry_id: Uuid, form: &EntryForm) -> Result<Self, FieldErrors> {
        let text = form.validate()?;
        Ok(Self {
            requester,
            entry_id,
            text,
        })
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditEntryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditEntryUseCase: Send + Sync {
    async fn execute(&self, command: EditEntryCommand) -> Result<EntryView, EditEntryError>;
}
