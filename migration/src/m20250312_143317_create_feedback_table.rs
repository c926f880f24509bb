use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Feedback::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Feedback::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Feedback::Message)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Feedback::Category)
                            .string_len(20)
                            .not_null()
                            .default("general"),
                    )
                    .col(ColumnDef::new(Feedback::Rating).small_integer().null())
                    .col(
                        ColumnDef::new(Feedback::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Feedback::AdminResponse)
                            .string_len(1000)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Feedback::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Feedback::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Feedback::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_user_id")
                            .from(Feedback::Table, Feedback::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin listing filters on status/category, newest-first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_feedback_status_category
                ON feedback (status, category, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_feedback_user_id
                ON feedback (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_feedback_updated_at
                BEFORE UPDATE ON feedback
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_feedback_updated_at ON feedback")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_feedback_status_category;
                DROP INDEX IF EXISTS idx_feedback_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Feedback {
    Table,
    Id,
    UserId,
    Message,
    Category,
    Rating,
    Status,
    AdminResponse,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
