use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

use super::sea_orm_entity::users::{Column, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map(|model| model.map(|m| m.to_query_result()))
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}
