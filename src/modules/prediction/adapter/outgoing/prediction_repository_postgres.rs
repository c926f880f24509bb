use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::prediction::application::domain::entities::PredictionRecord;
use crate::modules::prediction::application::ports::outgoing::{
    PredictionRepository, PredictionRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Entity as Predictions, Model};

#[derive(Debug, Clone)]
pub struct PredictionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PredictionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PredictionRepository for PredictionRepositoryPostgres {
    async fn record(
        &self,
        prediction: PredictionRecord,
    ) -> Result<PredictionRecord, PredictionRepositoryError> {
        let weather = prediction
            .weather
            .as_ref()
            .map(|snapshot| serde_json::json!(snapshot));
        let treatments = prediction
            .treatments
            .as_ref()
            .map(|items| serde_json::json!(items));

        let active = ActiveModel {
            id: Set(prediction.id),
            user_id: Set(prediction.user_id),
            image_ref: Set(prediction.image_ref),
            original_filename: Set(prediction.original_filename),
            predicted_label: Set(prediction.predicted_label),
            confidence: Set(prediction.confidence),
            alternatives: Set(serde_json::json!(prediction.alternatives)),
            crop_type: Set(prediction.crop_type.as_str().to_string()),
            latitude: Set(prediction.location.map(|point| point.latitude)),
            longitude: Set(prediction.location.map(|point| point.longitude)),
            weather: Set(weather),
            treatments: Set(treatments),
            is_verified: Set(prediction.is_verified),
            verified_by: Set(prediction.verified_by),
            created_at: Set(prediction.created_at.into()),
        };

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| PredictionRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn set_verified(
        &self,
        prediction_id: Uuid,
        verifier: &str,
    ) -> Result<PredictionRecord, PredictionRepositoryError> {
        let model = Predictions::find_by_id(prediction_id)
            .one(&*self.db)
            .await
            .map_err(|e| PredictionRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PredictionRepositoryError::PredictionNotFound)?;

        let mut active: ActiveModel = model.into();
        active.is_verified = Set(true);
        active.verified_by = Set(Some(verifier.to_string()));

        let updated: Model = active
            .update(&*self.db)
            .await
            .map_err(|e| PredictionRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_domain())
    }
}
