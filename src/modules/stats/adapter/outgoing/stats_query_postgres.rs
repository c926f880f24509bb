use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::feedback::adapter::outgoing::sea_orm_entity as feedback;
use crate::modules::prediction::adapter::outgoing::sea_orm_entity as predictions;
use crate::modules::prediction::application::domain::entities::PredictionRecord;
use crate::modules::stats::application::ports::outgoing::{
    DiseaseBucket, StatsQuery, StatsQueryError,
};

#[derive(Debug, Clone)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Raw shape of one GROUP BY row before it becomes a `DiseaseBucket`.
#[derive(Debug, FromQueryResult)]
struct DiseaseBucketRow {
    label: String,
    count: i64,
    avg_confidence: f64,
}

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn active_account_count(&self) -> Result<u64, StatsQueryError> {
        users::Entity::find()
            .filter(users::Column::IsActive.eq(true))
            .count(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))
    }

    async fn prediction_count(&self) -> Result<u64, StatsQueryError> {
        predictions::Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))
    }

    async fn feedback_count(&self) -> Result<u64, StatsQueryError> {
        feedback::Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))
    }

    async fn recent_predictions(
        &self,
        limit: u64,
    ) -> Result<Vec<PredictionRecord>, StatsQueryError> {
        let models = predictions::Entity::find()
            .order_by_desc(predictions::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(predictions::Model::to_domain)
            .collect())
    }

    async fn disease_distribution(
        &self,
        limit: u64,
    ) -> Result<Vec<DiseaseBucket>, StatsQueryError> {
        let rows: Vec<DiseaseBucketRow> = predictions::Entity::find()
            .select_only()
            .column_as(predictions::Column::PredictedLabel, "label")
            .column_as(Expr::col(predictions::Column::Id).count(), "count")
            .column_as(
                SimpleExpr::from(Func::avg(Expr::col(predictions::Column::Confidence))),
                "avg_confidence",
            )
            .group_by(predictions::Column::PredictedLabel)
            .order_by_desc(Expr::col(predictions::Column::Id).count())
            .limit(limit)
            .into_model::<DiseaseBucketRow>()
            .all(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| DiseaseBucket {
                label: row.label,
                count: row.count,
                avg_confidence: row.avg_confidence,
            })
            .collect())
    }
}
