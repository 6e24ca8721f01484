use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::outgoing::{
    CreateEntryData, EntryRepository, EntryRepositoryError, EntryView,
};

use super::sea_orm_entity::{
    ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as EntryEntity,
};

#[derive(Debug, Clone)]
pub struct EntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn database_error(e: DbErr) -> EntryRepositoryError {
    error!("Entry repository error: {}", e);
    EntryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EntryRepository for EntryRepositoryPostgres {
    async fn create_entry(&self, data: CreateEntryData) -> Result<EntryView, EntryRepositoryError> {
        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            owner_id: Set(data.owner.value()),
            text: Set(data.text),
            date_added: Set(Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(database_error)?;

        Ok(inserted.to_view())
    }

    async fn update_entry_text(
        &self,
        owner: UserId,
        entry_id: Uuid,
        text: String,
    ) -> Result<EntryView, EntryRepositoryError> {
        let updated = EntryEntity::update_many()
            .col_expr(EntryColumn::Text, Expr::value(text))
            .filter(EntryColumn::Id.eq(entry_id))
            .filter(EntryColumn::OwnerId.eq(owner.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(database_error)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_view())
            .ok_or(EntryRepositoryError::NotFound)
    }

    async fn delete_entry(&self, owner: UserId, entry_id: Uuid) -> Result<(), EntryRepositoryError> {
        let result = EntryEntity::delete_many()
            .filter(EntryColumn::Id.eq(entry_id))
            .filter(EntryColumn::OwnerId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(database_error)?;

        if result.rows_affected == 0 {
            return Err(EntryRepositoryError::NotFound);
        }

        Ok(())
    }
}
