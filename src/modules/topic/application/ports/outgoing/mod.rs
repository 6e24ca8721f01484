mod topic_query;
mod topic_repository;

pub use topic_query::{TopicQuery, TopicQueryError, TopicView};
pub use topic_repository::{CreateTopicData, TopicRepository, TopicRepositoryError};
