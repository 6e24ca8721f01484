use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::adapter::outgoing::sea_orm_entity::{
    Column as EntryColumn, Entity as EntryEntity,
};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicView,
};

use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as TopicEntity,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn database_error(e: DbErr) -> TopicRepositoryError {
    error!("Topic repository error: {}", e);
    TopicRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(data.owner.value()),
            text: Set(data.text),
            date_added: Set(Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(database_error)?;

        Ok(inserted.to_view())
    }

    async fn update_topic_text(
        &self,
        owner: UserId,
        topic_id: Uuid,
        text: String,
    ) -> Result<TopicView, TopicRepositoryError> {
        let updated = TopicEntity::update_many()
            .col_expr(TopicColumn::Text, Expr::value(text))
            .filter(TopicColumn::Id.eq(topic_id))
            .filter(TopicColumn::OwnerId.eq(owner.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(database_error)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_view())
            .ok_or(TopicRepositoryError::NotFound)
    }

    async fn delete_topic(&self, owner: UserId, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(database_error)?;

        let topic = TopicEntity::find_by_id(topic_id)
            .filter(TopicColumn::OwnerId.eq(owner.value()))
            .one(&txn)
            .await
            .map_err(database_error)?
            .ok_or(TopicRepositoryError::NotFound)?;

        EntryEntity::delete_many()
            .filter(EntryColumn::TopicId.eq(topic.id))
            .exec(&txn)
            .await
            .map_err(database_error)?;

        TopicEntity::delete_by_id(topic.id)
            .exec(&txn)
            .await
            .map_err(database_error)?;

        txn.commit().await.map_err(database_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::adapter::outgoing::sea_orm_entity::Model as TopicModel;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn topic_model(owner: UserId, text: &str) -> TopicModel {
        TopicModel {
            id: Uuid::new_v4(),
            owner_id: owner.value(),
            text: text.to_string(),
            date_added: Utc::now().fixed_offset(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn create_topic_returns_inserted_row() {
        let owner = UserId::from(Uuid::new_v4());
        let inserted = topic_model(owner, "Algebra");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]])
            .into_connection();

        let topic = TopicRepositoryPostgres::new(Arc::new(db))
            .create_topic(CreateTopicData {
                owner,
                text: "Algebra".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(topic.id, inserted.id);
        assert_eq!(topic.owner, owner);
        assert_eq!(topic.text, "Algebra");
    }

    #[tokio::test]
    async fn create_topic_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let result = TopicRepositoryPostgres::new(Arc::new(db))
            .create_topic(CreateTopicData {
                owner: UserId::from(Uuid::new_v4()),
                text: "Algebra".to_string(),
            })
            .await;

        assert!(matches!(result, Err(TopicRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn update_returns_row_matching_id_and_owner() {
        let owner = UserId::from(Uuid::new_v4());
        let updated = topic_model(owner, "Algebra II");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated.clone()]])
            .into_connection();

        let topic = TopicRepositoryPostgres::new(Arc::new(db))
            .update_topic_text(owner, updated.id, "Algebra II".to_string())
            .await
            .unwrap();

        assert_eq!(topic.text, "Algebra II");
        assert_eq!(topic.id, updated.id);
    }

    #[tokio::test]
    async fn update_with_no_matching_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let result = TopicRepositoryPostgres::new(Arc::new(db))
            .update_topic_text(UserId::from(Uuid::new_v4()), Uuid::new_v4(), "x".to_string())
            .await;

        assert!(matches!(result, Err(TopicRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_entries_then_topic() {
        let owner = UserId::from(Uuid::new_v4());
        let topic = topic_model(owner, "Algebra");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic.clone()]])
            .append_exec_results(vec![exec(3), exec(1)])
            .into_connection();

        let result = TopicRepositoryPostgres::new(Arc::new(db))
            .delete_topic(owner, topic.id)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_of_foreign_or_missing_topic_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let result = TopicRepositoryPostgres::new(Arc::new(db))
            .delete_topic(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(TopicRepositoryError::NotFound)));
    }
}
