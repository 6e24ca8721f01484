use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub owner_id: Uuid,

    pub text: String,

    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(self) -> TopicView {
        TopicView {
            id: self.id,
            owner: UserId::from(self.owner_id),
            text: self.text,
            date_added: self.date_added.with_timezone(&Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::OwnerId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl ActiveModelBehavior for ActiveModel {}
