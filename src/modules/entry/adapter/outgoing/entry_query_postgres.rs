use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::entry::application::ports::outgoing::{EntryQuery, EntryQueryError, EntryView};

use super::sea_orm_entity::{Column as EntryColumn, Entity as EntryEntity};

#[derive(Debug, Clone)]
pub struct EntryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryQuery for EntryQueryPostgres {
    async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<EntryView>, EntryQueryError> {
        let models = EntryEntity::find()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .order_by_asc(EntryColumn::DateAdded)
            .order_by_asc(EntryColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_view()).collect())
    }

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<EntryView>, EntryQueryError> {
        let model = EntryEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_view()))
    }
}
