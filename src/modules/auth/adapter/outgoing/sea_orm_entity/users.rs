use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQueryResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub date_joined: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> User {
        User {
            id: UserId::from(self.id),
            username: self.username,
            password_hash: self.password_hash,
            date_joined: self.date_joined.with_timezone(&chrono::Utc),
        }
    }

    pub fn to_query_result(self) -> UserQueryResult {
        UserQueryResult {
            id: UserId::from(self.id),
            username: self.username,
            password_hash: self.password_hash,
            date_joined: self.date_joined.with_timezone(&chrono::Utc),
        }
    }
}
