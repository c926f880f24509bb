use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::prediction::application::domain::entities::{
    AlternativePrediction, CropType, GeoPoint, PredictionRecord, WeatherSnapshot,
};
use crate::modules::prediction::application::ports::outgoing::{
    ModelGateway, ModelGatewayError, PredictionRepository, SoilFeatures,
};

/// A caller-supplied prediction outcome, used when the client already ran
/// inference (for example the offline mobile model) and only needs the
/// result archived.
#[derive(Debug, Clone)]
pub struct PresetOutcome {
    pub label: String,
    pub confidence: f64,
    pub alternatives: Vec<AlternativePrediction>,
    pub treatments: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct RecordPredictionInput {
    /// None records an anonymous submission.
    pub owner_id: Option<Uuid>,
    pub image_ref: String,
    pub original_filename: String,
    pub crop_type: Option<String>,
    /// When present, the model service is consulted for the label.
    pub soil_features: Option<SoilFeatures>,
    /// When present, the outcome is archived as-is (no model call).
    pub preset: Option<PresetOutcome>,
    pub location: Option<GeoPoint>,
    pub weather: Option<WeatherSnapshot>,
}

#[derive(Debug, Clone)]
pub enum RecordPredictionError {
    InvalidImage,
    MissingPredictionSource,
    InvalidConfidence,
    OwnerNotFound,
    ModelServiceUnavailable(String),
    ModelServiceInvalidResponse(String),
    RepositoryError(String),
    QueryError(String),
}

impl std::fmt::Display for RecordPredictionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordPredictionError::InvalidImage => write!(f, "Invalid or missing image reference"),
            RecordPredictionError::MissingPredictionSource => {
                write!(f, "Either soil features or a precomputed outcome is required")
            }
            RecordPredictionError::InvalidConfidence => {
                write!(f, "Confidence must be within [0, 1]")
            }
            RecordPredictionError::OwnerNotFound => write!(f, "Owner account not found"),
            RecordPredictionError::ModelServiceUnavailable(msg) => {
                write!(f, "Model service unavailable: {}", msg)
            }
            RecordPredictionError::ModelServiceInvalidResponse(msg) => {
                write!(f, "Model service returned an invalid response: {}", msg)
            }
            RecordPredictionError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            RecordPredictionError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for RecordPredictionError {}

#[async_trait]
pub trait IRecordPredictionUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RecordPredictionInput,
    ) -> Result<PredictionRecord, RecordPredictionError>;
}

pub struct RecordPredictionUseCase<R>
where
    R: PredictionRepository + Send + Sync,
{
    repository: R,
    account_query: Arc<dyn AccountQuery>,
    model_gateway: Arc<dyn ModelGateway>,
}

impl<R> RecordPredictionUseCase<R>
where
    R: PredictionRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        account_query: Arc<dyn AccountQuery>,
        model_gateway: Arc<dyn ModelGateway>,
    ) -> Self {
        Self {
            repository,
            account_query,
            model_gateway,
        }
    }
}

fn confidence_in_bounds(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

#[async_trait]
impl<R> IRecordPredictionUseCase for RecordPredictionUseCase<R>
where
    R: PredictionRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RecordPredictionInput,
    ) -> Result<PredictionRecord, RecordPredictionError> {
        let image_ref = input.image_ref.trim().to_string();
        let original_filename = input.original_filename.trim().to_string();
        if image_ref.is_empty() || original_filename.is_empty() {
            return Err(RecordPredictionError::InvalidImage);
        }

        // An owned record must point at a real account at creation time.
        // Anonymous submissions skip the check entirely.
        if let Some(owner_id) = input.owner_id {
            self.account_query
                .find_by_id(owner_id)
                .await
                .map_err(|e| RecordPredictionError::QueryError(e.to_string()))?
                .ok_or(RecordPredictionError::OwnerNotFound)?;
        }

        let (label, confidence, alternatives, treatments) = match (input.preset, input.soil_features)
        {
            (Some(preset), _) => {
                if !confidence_in_bounds(preset.confidence)
                    || preset
                        .alternatives
                        .iter()
                        .any(|alt| !confidence_in_bounds(alt.confidence))
                {
                    return Err(RecordPredictionError::InvalidConfidence);
                }
                (
                    preset.label,
                    preset.confidence,
                    preset.alternatives,
                    preset.treatments,
                )
            }
            (None, Some(features)) => {
                let recommendation = self
                    .model_gateway
                    .recommend_crop(&features)
                    .await
                    .map_err(|e| match e {
                        ModelGatewayError::Unavailable(msg) => {
                            RecordPredictionError::ModelServiceUnavailable(msg)
                        }
                        ModelGatewayError::InvalidResponse(msg) => {
                            RecordPredictionError::ModelServiceInvalidResponse(msg)
                        }
                    })?;

                if !confidence_in_bounds(recommendation.primary.confidence) {
                    return Err(RecordPredictionError::InvalidConfidence);
                }

                let alternatives = recommendation
                    .alternatives
                    .into_iter()
                    .map(|score| AlternativePrediction {
                        label: score.crop,
                        confidence: score.confidence,
                    })
                    .collect();

                (
                    recommendation.primary.crop,
                    recommendation.primary.confidence,
                    alternatives,
                    None,
                )
            }
            (None, None) => return Err(RecordPredictionError::MissingPredictionSource),
        };

        let record = PredictionRecord {
            id: Uuid::new_v4(),
            user_id: input.owner_id,
            image_ref,
            original_filename,
            predicted_label: label,
            confidence,
            alternatives,
            crop_type: input
                .crop_type
                .as_deref()
                .map(CropType::from_label)
                .unwrap_or(CropType::Other),
            location: input.location,
            weather: input.weather,
            treatments,
            is_verified: false,
            verified_by: None,
            created_at: chrono::Utc::now(),
        };

        self.repository
            .record(record)
            .await
            .map_err(|e| RecordPredictionError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Account;
    use crate::modules::auth::application::ports::outgoing::AccountQueryError;
    use crate::modules::prediction::application::ports::outgoing::model_gateway::MockModelGateway;
    use crate::modules::prediction::application::ports::outgoing::{
        CropRecommendation, CropScore, PredictionRepositoryError,
    };

    struct MockAccountQuery {
        account: Option<Account>,
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, AccountQueryError> {
            Ok(self.account.clone())
        }

        async fn find_by_email(&self, _e: &str) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn find_by_username(&self, _u: &str) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }
    }

    struct MockPredictionRepository;

    #[async_trait]
    impl PredictionRepository for MockPredictionRepository {
        async fn record(
            &self,
            prediction: PredictionRecord,
        ) -> Result<PredictionRecord, PredictionRepositoryError> {
            Ok(prediction)
        }

        async fn set_verified(
            &self,
            _prediction_id: Uuid,
            _verifier: &str,
        ) -> Result<PredictionRecord, PredictionRepositoryError> {
            unimplemented!()
        }
    }

    fn account() -> Account {
        Account {
            id: Uuid::new_v4(),
            username: "farmer1".to_string(),
            email: "f1@example.com".to_string(),
            password_hash: "hash".to_string(),
            location: None,
            farm_size: None,
            crops: vec![],
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn soil_features() -> SoilFeatures {
        SoilFeatures {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            temperature: 21.0,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 202.9,
        }
    }

    fn preset(confidence: f64) -> PresetOutcome {
        PresetOutcome {
            label: "Late Blight".to_string(),
            confidence,
            alternatives: vec![],
            treatments: Some(vec!["copper fungicide".to_string()]),
        }
    }

    fn base_input() -> RecordPredictionInput {
        RecordPredictionInput {
            owner_id: None,
            image_ref: "uploads/leaf-001.jpg".to_string(),
            original_filename: "leaf.jpg".to_string(),
            crop_type: Some("vegetable".to_string()),
            soil_features: None,
            preset: Some(preset(0.93)),
            location: None,
            weather: None,
        }
    }

    fn use_case(
        account: Option<Account>,
        gateway: MockModelGateway,
    ) -> RecordPredictionUseCase<MockPredictionRepository> {
        RecordPredictionUseCase::new(
            MockPredictionRepository,
            Arc::new(MockAccountQuery { account }),
            Arc::new(gateway),
        )
    }

    #[tokio::test]
    async fn anonymous_preset_submission_is_recorded() {
        let uc = use_case(None, MockModelGateway::new());

        let record = uc.execute(base_input()).await.unwrap();

        assert_eq!(record.user_id, None);
        assert_eq!(record.predicted_label, "Late Blight");
        assert_eq!(record.crop_type, CropType::Vegetable);
        assert!(!record.is_verified);
        assert_eq!(
            record.treatments.as_deref(),
            Some(&["copper fungicide".to_string()][..])
        );
    }

    #[tokio::test]
    async fn soil_features_consult_the_model_service() {
        let mut gateway = MockModelGateway::new();
        gateway.expect_recommend_crop().returning(|_| {
            Ok(CropRecommendation {
                primary: CropScore {
                    crop: "rice".to_string(),
                    confidence: 0.87,
                },
                alternatives: vec![CropScore {
                    crop: "maize".to_string(),
                    confidence: 0.09,
                }],
            })
        });

        let owner = account();
        let owner_id = owner.id;
        let uc = use_case(Some(owner), gateway);

        let mut input = base_input();
        input.owner_id = Some(owner_id);
        input.preset = None;
        input.soil_features = Some(soil_features());

        let record = uc.execute(input).await.unwrap();

        assert_eq!(record.user_id, Some(owner_id));
        assert_eq!(record.predicted_label, "rice");
        assert_eq!(record.confidence, 0.87);
        assert_eq!(record.alternatives.len(), 1);
        assert_eq!(record.alternatives[0].label, "maize");
    }

    #[tokio::test]
    async fn gateway_outage_is_a_distinguishable_error() {
        let mut gateway = MockModelGateway::new();
        gateway.expect_recommend_crop().returning(|_| {
            Err(ModelGatewayError::Unavailable(
                "connect timeout".to_string(),
            ))
        });

        let uc = use_case(None, gateway);

        let mut input = base_input();
        input.preset = None;
        input.soil_features = Some(soil_features());

        assert!(matches!(
            uc.execute(input).await,
            Err(RecordPredictionError::ModelServiceUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn out_of_range_confidence_is_rejected() {
        let uc = use_case(None, MockModelGateway::new());

        for bad in [-0.1, 1.1, f64::NAN] {
            let mut input = base_input();
            input.preset = Some(preset(bad));
            assert!(
                matches!(
                    uc.execute(input).await,
                    Err(RecordPredictionError::InvalidConfidence)
                ),
                "confidence {} should be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn boundary_confidences_are_accepted() {
        let uc = use_case(None, MockModelGateway::new());

        for ok in [0.0, 1.0] {
            let mut input = base_input();
            input.preset = Some(preset(ok));
            assert!(uc.execute(input).await.is_ok());
        }
    }

    #[tokio::test]
    async fn unknown_owner_is_rejected() {
        let uc = use_case(None, MockModelGateway::new());

        let mut input = base_input();
        input.owner_id = Some(Uuid::new_v4());

        assert!(matches!(
            uc.execute(input).await,
            Err(RecordPredictionError::OwnerNotFound)
        ));
    }

    #[tokio::test]
    async fn blank_image_ref_is_rejected() {
        let uc = use_case(None, MockModelGateway::new());

        let mut input = base_input();
        input.image_ref = "   ".to_string();

        assert!(matches!(
            uc.execute(input).await,
            Err(RecordPredictionError::InvalidImage)
        ));
    }

    #[tokio::test]
    async fn missing_prediction_source_is_rejected() {
        let uc = use_case(None, MockModelGateway::new());

        let mut input = base_input();
        input.preset = None;
        input.soil_features = None;

        assert!(matches!(
            uc.execute(input).await,
            Err(RecordPredictionError::MissingPredictionSource)
        ));
    }

    #[tokio::test]
    async fn unknown_crop_type_falls_back_to_other() {
        let uc = use_case(None, MockModelGateway::new());

        let mut input = base_input();
        input.crop_type = Some("bamboo".to_string());

        let record = uc.execute(input).await.unwrap();
        assert_eq!(record.crop_type, CropType::Other);
    }
}
