use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError, TopicView};

use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_all(&self) -> Result<Vec<TopicView>, TopicQueryError> {
        let models = TopicEntity::find()
            .order_by_desc(TopicColumn::DateAdded)
            .order_by_desc(TopicColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_view()).collect())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<TopicView>, TopicQueryError> {
        let models = TopicEntity::find()
            .filter(TopicColumn::OwnerId.eq(owner.value()))
            .order_by_desc(TopicColumn::DateAdded)
            .order_by_desc(TopicColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_view()).collect())
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<TopicView>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_view()))
    }
}
