use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Donations::UserId).integer().not_null())
                    .col(ColumnDef::new(Donations::Amount).decimal().not_null())
                    .col(
                        ColumnDef::new(Donations::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Donations::Message).text())
                    .col(
                        ColumnDef::new(Donations::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_user_id")
                            .from(Donations::Table, Donations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Donation history is always read per owner, in insertion order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_donations_user_id
                ON donations (user_id, id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE donations
                ADD CONSTRAINT chk_donations_status
                CHECK (status IN ('pending', 'completed', 'failed'));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_donations_user_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(Donations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Donations {
    Table,
    Id,
    UserId,
    Amount,
    Date,
    Message,
    Status,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
