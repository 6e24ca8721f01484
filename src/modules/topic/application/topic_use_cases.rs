use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, EditTopicUseCase, GetOwnedTopicUseCase,
    ListOwnedTopicsUseCase, ListTopicsUseCase, ViewTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub list_owned: Arc<dyn ListOwnedTopicsUseCase + Send + Sync>,
    pub view: Arc<dyn ViewTopicUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_owned: Arc<dyn GetOwnedTopicUseCase + Send + Sync>,
    pub edit: Arc<dyn EditTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}
