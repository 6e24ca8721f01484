mod entry_query;
mod entry_repository;

pub use entry_query::{EntryQuery, EntryQueryError, EntryView};
pub use entry_repository::{CreateEntryData, EntryRepository, EntryRepositoryError};
