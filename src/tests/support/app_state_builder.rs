use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
};
use crate::entry::application::entry_use_cases::EntryUseCases;
use crate::entry::application::services::{
    CreateEntryService, DeleteEntryService, EditEntryService, GetOwnedEntryService,
};
use crate::tests::support::memory_store::InMemoryStore;
use crate::tests::support::stubs::*;
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, EditTopicService, GetOwnedTopicService,
    ListOwnedTopicsService, ListTopicsService, ViewTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Builds an [`AppState`] whose use cases panic unless a test overrides them.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    topic: TopicUseCases,
    entry: EntryUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            topic: TopicUseCases {
                list: Arc::new(StubListTopicsUseCase),
                list_owned: Arc::new(StubListOwnedTopicsUseCase),
                view: Arc::new(StubViewTopicUseCase),
                create: Arc::new(StubCreateTopicUseCase),
                get_owned: Arc::new(StubGetOwnedTopicUseCase),
                edit: Arc::new(StubEditTopicUseCase),
                delete: Arc::new(StubDeleteTopicUseCase),
            },
            entry: EntryUseCases {
                create: Arc::new(StubCreateEntryUseCase),
                get_owned: Arc::new(StubGetOwnedEntryUseCase),
                edit: Arc::new(StubEditEntryUseCase),
                delete: Arc::new(StubDeleteEntryUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.register_user = uc;
        self
    }

    pub fn with_login_user(mut self, uc: Arc<dyn ILoginUserUseCase + Send + Sync>) -> Self {
        self.login_user = uc;
        self
    }

    pub fn with_topic_use_cases(mut self, topic: TopicUseCases) -> Self {
        self.topic = topic;
        self
    }

    pub fn with_entry_use_cases(mut self, entry: EntryUseCases) -> Self {
        self.entry = entry;
        self
    }

    /// Wires the real topic and entry services to `store`.
    pub fn with_memory_store(self, store: &InMemoryStore) -> Self {
        let s = store.clone();
        self.with_topic_use_cases(TopicUseCases {
            list: Arc::new(ListTopicsService::new(s.clone())),
            list_owned: Arc::new(ListOwnedTopicsService::new(s.clone())),
            view: Arc::new(ViewTopicService::new(s.clone(), s.clone())),
            create: Arc::new(CreateTopicService::new(s.clone())),
            get_owned: Arc::new(GetOwnedTopicService::new(s.clone())),
            edit: Arc::new(EditTopicService::new(s.clone(), s.clone())),
            delete: Arc::new(DeleteTopicService::new(s.clone(), s.clone())),
        })
        .with_entry_use_cases(EntryUseCases {
            create: Arc::new(CreateEntryService::new(s.clone(), s.clone())),
            get_owned: Arc::new(GetOwnedEntryService::new(s.clone())),
            edit: Arc::new(EditEntryService::new(s.clone(), s.clone())),
            delete: Arc::new(DeleteEntryService::new(s.clone(), s)),
        })
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            topic: self.topic,
            entry: self.entry,
        })
    }
}
