use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entry::application::domain::EntryForm;
use crate::entry::application::ports::outgoing::EntryView;
use crate::shared::validation::FieldErrors;
use crate::topic::adapter::incoming::web::routes::TopicResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryResponse {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub owner_id: Uuid,
    #[schema(example = "Start from the definition of a group.")]
    pub text: String,
    pub date_added: DateTime<Utc>,
}

impl From<EntryView> for EntryResponse {
    fn from(entry: EntryView) -> Self {
        Self {
            id: entry.id,
            topic_id: entry.topic_id,
            owner_id: entry.owner.value(),
            text: entry.text,
            date_added: entry.date_added,
        }
    }
}

/// Entry form together with the topic it is added to and the entries so far.
#[derive(Debug, Serialize, ToSchema)]
pub struct NewEntryPage {
    pub topic: TopicResponse,
    pub entries: Vec<EntryResponse>,
    pub form: EntryForm,
    pub errors: FieldErrors,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditEntryPage {
    pub entry: EntryResponse,
    pub form: EntryForm,
    pub errors: FieldErrors,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteEntryPage {
    pub entry: EntryResponse,
}
