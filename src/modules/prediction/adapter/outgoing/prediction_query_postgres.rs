use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::prediction::application::domain::entities::PredictionRecord;
use crate::modules::prediction::application::ports::outgoing::{
    PredictionQuery, PredictionQueryError, SearchFilters,
};

use super::sea_orm_entity::{Column, Entity as Predictions, Model};

#[derive(Debug, Clone)]
pub struct PredictionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PredictionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PredictionQuery for PredictionQueryPostgres {
    async fn find_by_id(
        &self,
        prediction_id: Uuid,
    ) -> Result<Option<PredictionRecord>, PredictionQueryError> {
        let model: Option<Model> = Predictions::find_by_id(prediction_id)
            .one(&*self.db)
            .await
            .map_err(|e| PredictionQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Model::to_domain))
    }

    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<PredictionRecord>, u64), PredictionQueryError> {
        let paginator = Predictions::find()
            .filter(Column::UserId.eq(owner_id))
            .order_by_desc(Column::CreatedAt)
            .paginate(&*self.db, page_size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PredictionQueryError::DatabaseError(e.to_string()))?;

        // The paginator is 0-indexed; the API contract is 1-indexed.
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PredictionQueryError::DatabaseError(e.to_string()))?;

        Ok((models.into_iter().map(Model::to_domain).collect(), total))
    }

    async fn search(
        &self,
        filters: &SearchFilters,
        limit: u64,
    ) -> Result<Vec<PredictionRecord>, PredictionQueryError> {
        let mut query = Predictions::find();

        if let Some(label) = &filters.label_substring {
            query = query
                .filter(Expr::col(Column::PredictedLabel).ilike(format!("%{}%", label)));
        }
        if let Some(crop_type) = filters.crop_type {
            query = query.filter(Column::CropType.eq(crop_type.as_str()));
        }
        if let Some(verified) = filters.verified {
            query = query.filter(Column::IsVerified.eq(verified));
        }

        let models: Vec<Model> = query
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| PredictionQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Model::to_domain).collect())
    }
}
