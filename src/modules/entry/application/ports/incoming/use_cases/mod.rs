mod create_entry_use_case;
mod delete_entry_use_case;
mod edit_entry_use_case;
mod get_owned_entry_use_case;

pub use create_entry_use_case::{CreateEntryCommand, CreateEntryError, CreateEntryUseCase};
pub use delete_entry_use_case::{DeleteEntryError, DeleteEntryUseCase};
pub use edit_entry_use_case::{EditEntryCommand, EditEntryError, EditEntryUseCase};
pub use get_owned_entry_use_case::{GetOwnedEntryError, GetOwnedEntryUseCase};
