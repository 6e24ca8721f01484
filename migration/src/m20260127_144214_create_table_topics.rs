use sea_orm_migration::prelude::*;

/// Topics always carry an owner. Rows that predate ownership are not
/// backfilled here; `owner_id` has no default.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Topics::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Topics::Text).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Topics::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topics_owner_id")
                            .from(Topics::Table, Topics::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Newest-first listing, global and per owner
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_date_added
                ON topics (date_added DESC);

                CREATE INDEX idx_topics_owner_date_added
                ON topics (owner_id, date_added DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_date_added;
                DROP INDEX IF EXISTS idx_topics_owner_date_added;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    OwnerId,
    Text,
    DateAdded,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
