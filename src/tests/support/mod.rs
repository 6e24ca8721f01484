pub mod app_state_builder;
pub mod auth_helper;
pub mod memory_store;
pub mod stubs;

use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// A fresh identity; users never need a stored row in these tests.
pub fn new_user() -> UserId {
    UserId::from(Uuid::new_v4())
}
