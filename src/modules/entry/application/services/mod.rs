mod create_entry_service;
mod delete_entry_service;
mod edit_entry_service;
mod get_owned_entry_service;

pub use create_entry_service::CreateEntryService;
pub use delete_entry_service::DeleteEntryService;
pub use edit_entry_service::EditEntryService;
pub use get_owned_entry_service::GetOwnedEntryService;
