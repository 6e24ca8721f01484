mod create_topic_use_case;
mod delete_topic_use_case;
mod edit_topic_use_case;
mod get_owned_topic_use_case;
mod list_owned_topics_use_case;
mod list_topics_use_case;
mod view_topic_use_case;

pub use create_topic_use_case::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use edit_topic_use_case::{EditTopicCommand, EditTopicError, EditTopicUseCase};
pub use get_owned_topic_use_case::{GetOwnedTopicError, GetOwnedTopicUseCase};
pub use list_owned_topics_use_case::{ListOwnedTopicsError, ListOwnedTopicsUseCase};
pub use list_topics_use_case::{ListTopicsError, ListTopicsUseCase};
pub use view_topic_use_case::{TopicDetail, ViewTopicError, ViewTopicUseCase};
