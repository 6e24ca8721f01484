mod delete_entry;
mod dto;
mod edit_entry;
mod new_entry;

pub use delete_entry::*;
pub use dto::*;
pub use edit_entry::*;
pub use new_entry::*;
