mod create_topic_service;
mod delete_topic_service;
mod edit_topic_service;
mod get_owned_topic_service;
mod list_owned_topics_service;
mod list_topics_service;
mod view_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use edit_topic_service::EditTopicService;
pub use get_owned_topic_service::GetOwnedTopicService;
pub use list_owned_topics_service::ListOwnedTopicsService;
pub use list_topics_service::ListTopicsService;
pub use view_topic_service::ViewTopicService;
