use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entry::adapter::incoming::web::routes::EntryResponse;
use crate::shared::validation::FieldErrors;
use crate::topic::application::domain::TopicForm;
use crate::topic::application::ports::incoming::use_cases::TopicDetail;
use crate::topic::application::ports::outgoing::TopicView;

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    #[schema(example = "Algebra")]
    pub text: String,
    pub date_added: DateTime<Utc>,
}

impl From<TopicView> for TopicResponse {
    fn from(topic: TopicView) -> Self {
        Self {
            id: topic.id,
            owner_id: topic.owner.value(),
            text: topic.text,
            date_added: topic.date_added,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IndexPage {
    #[schema(example = "MathBlog")]
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicsPage {
    pub topics: Vec<TopicResponse>,
}

impl TopicsPage {
    pub fn new(topics: Vec<TopicView>) -> Self {
        Self {
            topics: topics.into_iter().map(TopicResponse::from).collect(),
        }
    }
}

/// A topic with its entries, oldest entry first.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicPage {
    pub topic: TopicResponse,
    pub entries: Vec<EntryResponse>,
}

impl From<TopicDetail> for TopicPage {
    fn from(detail: TopicDetail) -> Self {
        Self {
            topic: detail.topic.into(),
            entries: detail.entries.into_iter().map(EntryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NewTopicPage {
    pub form: TopicForm,
    pub errors: FieldErrors,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditTopicPage {
    pub topic: TopicResponse,
    pub form: TopicForm,
    pub errors: FieldErrors,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteTopicPage {
    pub topic: TopicResponse,
}
