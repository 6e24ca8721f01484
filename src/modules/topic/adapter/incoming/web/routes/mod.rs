mod delete_topic;
mod dto;
mod edit_topic;
mod index;
mod list_owned_topics;
mod list_topics;
mod new_topic;
mod view_topic;

pub use delete_topic::*;
pub use dto::*;
pub use edit_topic::*;
pub use index::*;
pub use list_owned_topics::*;
pub use list_topics::*;
pub use new_topic::*;
pub use view_topic::*;

use uuid::Uuid;

/// Landing spot after a topic is created, edited or deleted.
pub const TOPICS_PATH: &str = "/api/topics";

/// Landing spot after an entry of `topic_id` is created, edited or deleted.
pub fn topic_path(topic_id: Uuid) -> String {
    format!("{TOPICS_PATH}/{topic_id}")
}
