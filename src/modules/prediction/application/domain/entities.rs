use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed crop taxonomy. Labels arriving from clients or the model
/// service that do not match fall back to `Other` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Cereal,
    Vegetable,
    Fruit,
    Pulse,
    CashCrop,
    Other,
}

impl CropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Cereal => "cereal",
            CropType::Vegetable => "vegetable",
            CropType::Fruit => "fruit",
            CropType::Pulse => "pulse",
            CropType::CashCrop => "cash_crop",
            CropType::Other => "other",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "cereal" => CropType::Cereal,
            "vegetable" => CropType::Vegetable,
            "fruit" => CropType::Fruit,
            "pulse" => CropType::Pulse,
            "cash_crop" => CropType::CashCrop,
            _ => CropType::Other,
        }
    }
}

/// One ranked runner-up from the model, kept alongside the primary label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativePrediction {
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Weather at submission time, as reported by the caller. The platform
/// does not talk to the weather provider itself; it archives whatever
/// snapshot accompanied the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub id: Uuid,
    /// None for anonymous submissions.
    pub user_id: Option<Uuid>,
    pub image_ref: String,
    pub original_filename: String,
    pub predicted_label: String,
    pub confidence: f64,
    pub alternatives: Vec<AlternativePrediction>,
    pub crop_type: CropType,
    pub location: Option<GeoPoint>,
    pub weather: Option<WeatherSnapshot>,
    pub treatments: Option<Vec<String>>,
    pub is_verified: bool,
    pub verified_by: Option<String>,
    pub created_at: DateTime<Utc>,
}
