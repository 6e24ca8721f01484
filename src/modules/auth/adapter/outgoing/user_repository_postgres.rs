use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::is_unique_violation;
use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id.value()),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            date_joined: Set(user.date_joined.into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UsernameTaken;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    fn model_for(user: &User) -> UserModel {
        UserModel {
            id: user.id.value(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            date_joined: user.date_joined.into(),
        }
    }

    #[tokio::test]
    async fn create_user_returns_inserted_row() {
        let user = User::new("alice".to_string(), "hashed".to_string());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model_for(&user)]])
            .into_connection();

        let created = UserRepositoryPostgres::new(Arc::new(db))
            .create_user(user.clone())
            .await
            .unwrap();

        assert_eq!(created.id, user.id);
        assert_eq!(created.username, "alice");
    }

    #[tokio::test]
    async fn create_user_detects_duplicate_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"users_username_key\"".to_string(),
            ))])
            .into_connection();

        let result = UserRepositoryPostgres::new(Arc::new(db))
            .create_user(User::new("alice".to_string(), "hashed".to_string()))
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UsernameTaken)));
    }

    #[tokio::test]
    async fn create_user_maps_other_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = UserRepositoryPostgres::new(Arc::new(db))
            .create_user(User::new("alice".to_string(), "hashed".to_string()))
            .await;

        assert!(matches!(result, Err(UserRepositoryError::DatabaseError(msg)) if msg.contains("connection reset")));
    }
}
