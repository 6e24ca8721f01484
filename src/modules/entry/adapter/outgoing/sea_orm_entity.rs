use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::outgoing::EntryView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub topic_id: Uuid,

    pub owner_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(self) -> EntryView {
        EntryView {
            id: self.id,
            topic_id: self.topic_id,
            owner: UserId::from(self.owner_id),
            text: self.text,
            date_added: self.date_added.with_timezone(&Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::topic::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TopicId",
        to = "crate::topic::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,

    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::OwnerId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl ActiveModelBehavior for ActiveModel {}
