use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::prediction::application::domain::entities::{
    CropType, GeoPoint, PredictionRecord,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "predictions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub image_ref: String,
    pub original_filename: String,
    pub predicted_label: String,
    pub confidence: f64,
    // Ranked runner-up predictions as a jsonb array of {label, confidence}.
    pub alternatives: Json,
    pub crop_type: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weather: Option<Json>,
    pub treatments: Option<Json>,
    pub is_verified: bool,
    pub verified_by: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> PredictionRecord {
        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        };

        PredictionRecord {
            id: self.id,
            user_id: self.user_id,
            image_ref: self.image_ref,
            original_filename: self.original_filename,
            predicted_label: self.predicted_label,
            confidence: self.confidence,
            alternatives: serde_json::from_value(self.alternatives).unwrap_or_default(),
            crop_type: CropType::from_label(&self.crop_type),
            location,
            weather: self
                .weather
                .and_then(|value| serde_json::from_value(value).ok()),
            treatments: self
                .treatments
                .and_then(|value| serde_json::from_value(value).ok()),
            is_verified: self.is_verified,
            verified_by: self.verified_by,
            created_at: self.created_at.to_utc(),
        }
    }
}
