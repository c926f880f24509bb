use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Predictions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Predictions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // Nullable: anonymous submissions carry no owner.
                    .col(ColumnDef::new(Predictions::UserId).uuid().null())
                    .col(
                        ColumnDef::new(Predictions::ImageRef)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Predictions::OriginalFilename)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Predictions::PredictedLabel)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Predictions::Confidence).double().not_null())
                    .col(
                        ColumnDef::new(Predictions::Alternatives)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Predictions::CropType)
                            .string_len(30)
                            .not_null()
                            .default("other"),
                    )
                    .col(ColumnDef::new(Predictions::Latitude).double().null())
                    .col(ColumnDef::new(Predictions::Longitude).double().null())
                    .col(ColumnDef::new(Predictions::Weather).json_binary().null())
                    .col(ColumnDef::new(Predictions::Treatments).json_binary().null())
                    .col(
                        ColumnDef::new(Predictions::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Predictions::VerifiedBy)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Predictions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_predictions_user_id")
                            .from(Predictions::Table, Predictions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-user history is always newest-first and paginated.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_predictions_user_created
                ON predictions (user_id, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_predictions_created_at
                ON predictions (created_at DESC);
                "#,
            )
            .await?;

        // Search filters: case-insensitive label substring + crop type + verified flag.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_predictions_label_lower
                ON predictions (lower(predicted_label));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_predictions_crop_verified
                ON predictions (crop_type, is_verified);
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
                DROP INDEX IF EXISTS idx_predictions_user_created;
                DROP INDEX IF EXISTS idx_predictions_created_at;
                DROP INDEX IF EXISTS idx_predictions_label_lower;
                DROP INDEX IF EXISTS idx_predictions_crop_verified;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Predictions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Predictions {
    Table,
    Id,
    UserId,
    ImageRef,
    OriginalFilename,
    PredictedLabel,
    Confidence,
    Alternatives,
    CropType,
    Latitude,
    Longitude,
    Weather,
    Treatments,
    IsVerified,
    VerifiedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
