use std::sync::Arc;

use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryUseCase, DeleteEntryUseCase, EditEntryUseCase, GetOwnedEntryUseCase,
};

#[derive(Clone)]
pub struct EntryUseCases {
    pub create: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub get_owned: Arc<dyn GetOwnedEntryUseCase + Send + Sync>,
    pub edit: Arc<dyn EditEntryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEntryUseCase + Send + Sync>,
}
