//! Access rules for topics and entries.
//!
//! Collection operations (listing all topics, listing one's own topics,
//! creating a topic or entry) only need an authenticated identity.
//! Record operations go through [`OwnershipPolicy::authorize`]: viewing is
//! open to every authenticated user, editing and deleting are reserved to
//! the record's owner.

use super::entities::UserId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    View,
    Edit,
    Delete,
}

impl RecordAction {
    fn owner_only(self) -> bool {
        matches!(self, RecordAction::Edit | RecordAction::Delete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Authentication required")]
    AuthenticationRequired,

    /// A foreign record is reported exactly like a missing one.
    #[error("Not found")]
    NotFound,
}

pub trait Owned {
    fn owner(&self) -> UserId;
}

pub struct OwnershipPolicy;

impl OwnershipPolicy {
    pub fn authenticate(requester: Option<UserId>) -> Result<UserId, AccessError> {
        requester.ok_or(AccessError::AuthenticationRequired)
    }

    /// Hands the record back when `requester` may perform `action` on it.
    pub fn authorize<T: Owned>(
        requester: UserId,
        action: RecordAction,
        record: Option<T>,
    ) -> Result<T, AccessError> {
        let record = record.ok_or(AccessError::NotFound)?;

        if action.owner_only() && record.owner() != requester {
            return Err(AccessError::NotFound);
        }

        Ok(record)
    }
}
