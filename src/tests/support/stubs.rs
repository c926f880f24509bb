//! Default use-case stubs for handler tests. Each returns the most boring
//! possible success so tests only override the use case under scrutiny.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Account, PublicProfile};
use crate::modules::auth::application::use_cases::deactivate_account::{
    DeactivateAccountError, IDeactivateAccountUseCase,
};
use crate::modules::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase,
};
use crate::modules::auth::application::use_cases::login_account::{
    AccountInfo, ILoginAccountUseCase, LoginError, LoginRequest, LoginResponse,
};
use crate::modules::auth::application::use_cases::register_account::{
    IRegisterAccountUseCase, RegisterAccountError, RegisterRequest,
};
use crate::modules::auth::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError, UpdateProfileInput,
};
use crate::modules::feedback::application::domain::entities::{
    FeedbackCategory, FeedbackRecord, FeedbackStatus, FeedbackWithOwner,
};
use crate::modules::feedback::application::ports::outgoing::FeedbackFilters;
use crate::modules::feedback::application::use_cases::list_feedback::{
    IListFeedbackUseCase, ListFeedbackError,
};
use crate::modules::feedback::application::use_cases::moderate_feedback::{
    IModerateFeedbackUseCase, ModerateFeedbackError,
};
use crate::modules::feedback::application::use_cases::submit_feedback::{
    ISubmitFeedbackUseCase, SubmitFeedbackError, SubmitFeedbackInput,
};
use crate::modules::prediction::application::domain::entities::{CropType, PredictionRecord};
use crate::modules::prediction::application::ports::outgoing::{
    CropRecommendation, CropScore, ModelGatewayError, SearchFilters, SoilFeatures,
};
use crate::modules::prediction::application::use_cases::fetch_prediction_history::{
    FetchHistoryError, HistoryPage, IFetchHistoryUseCase,
};
use crate::modules::prediction::application::use_cases::record_prediction::{
    IRecordPredictionUseCase, RecordPredictionError, RecordPredictionInput,
};
use crate::modules::prediction::application::use_cases::recommend_crops::IRecommendCropsUseCase;
use crate::modules::prediction::application::use_cases::search_predictions::{
    ISearchPredictionsUseCase, SearchPredictionsError,
};
use crate::modules::prediction::application::use_cases::verify_prediction::{
    IVerifyPredictionUseCase, VerifyPredictionError,
};
use crate::modules::stats::application::use_cases::dashboard_summary::{
    DashboardSummary, DashboardSummaryError, IDashboardSummaryUseCase,
};

fn stub_account() -> Account {
    Account {
        id: Uuid::new_v4(),
        username: "stub".to_string(),
        email: "stub@example.com".to_string(),
        password_hash: "hash".to_string(),
        location: None,
        farm_size: None,
        crops: vec![],
        is_active: true,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn stub_prediction() -> PredictionRecord {
    PredictionRecord {
        id: Uuid::new_v4(),
        user_id: None,
        image_ref: "uploads/stub.jpg".to_string(),
        original_filename: "stub.jpg".to_string(),
        predicted_label: "Healthy".to_string(),
        confidence: 1.0,
        alternatives: vec![],
        crop_type: CropType::Other,
        location: None,
        weather: None,
        treatments: None,
        is_verified: false,
        verified_by: None,
        created_at: chrono::Utc::now(),
    }
}

fn stub_feedback() -> FeedbackRecord {
    FeedbackRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        message: "stub".to_string(),
        category: FeedbackCategory::General,
        rating: None,
        status: FeedbackStatus::Pending,
        admin_response: None,
        is_public: false,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

pub struct StubRegisterAccountUseCase;

#[async_trait]
impl IRegisterAccountUseCase for StubRegisterAccountUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<Account, RegisterAccountError> {
        Ok(stub_account())
    }
}

pub struct StubLoginAccountUseCase;

#[async_trait]
impl ILoginAccountUseCase for StubLoginAccountUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let account = stub_account();
        Ok(LoginResponse {
            token: "stub-token".to_string(),
            account: AccountInfo {
                id: account.id,
                username: account.username,
                email: account.email,
            },
        })
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _account_id: Uuid) -> Result<PublicProfile, FetchProfileError> {
        Ok(PublicProfile::from(stub_account()))
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _account_id: Uuid,
        _input: UpdateProfileInput,
    ) -> Result<PublicProfile, UpdateProfileError> {
        Ok(PublicProfile::from(stub_account()))
    }
}

pub struct StubDeactivateAccountUseCase;

#[async_trait]
impl IDeactivateAccountUseCase for StubDeactivateAccountUseCase {
    async fn execute(
        &self,
        _account_id: Uuid,
        _password: &str,
    ) -> Result<(), DeactivateAccountError> {
        Ok(())
    }
}

pub struct StubRecordPredictionUseCase;

#[async_trait]
impl IRecordPredictionUseCase for StubRecordPredictionUseCase {
    async fn execute(
        &self,
        _input: RecordPredictionInput,
    ) -> Result<PredictionRecord, RecordPredictionError> {
        Ok(stub_prediction())
    }
}

pub struct StubFetchHistoryUseCase;

#[async_trait]
impl IFetchHistoryUseCase for StubFetchHistoryUseCase {
    async fn execute(
        &self,
        _owner_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<HistoryPage, FetchHistoryError> {
        Ok(HistoryPage {
            records: vec![],
            total_count: 0,
            page,
            page_size,
            total_pages: 0,
            has_next: false,
            has_previous: false,
        })
    }
}

pub struct StubSearchPredictionsUseCase;

#[async_trait]
impl ISearchPredictionsUseCase for StubSearchPredictionsUseCase {
    async fn execute(
        &self,
        _filters: SearchFilters,
    ) -> Result<Vec<PredictionRecord>, SearchPredictionsError> {
        Ok(vec![])
    }
}

pub struct StubVerifyPredictionUseCase;

#[async_trait]
impl IVerifyPredictionUseCase for StubVerifyPredictionUseCase {
    async fn execute(
        &self,
        prediction_id: Uuid,
        verifier: &str,
    ) -> Result<PredictionRecord, VerifyPredictionError> {
        let mut record = stub_prediction();
        record.id = prediction_id;
        record.is_verified = true;
        record.verified_by = Some(verifier.to_string());
        Ok(record)
    }
}

pub struct StubRecommendCropsUseCase;

#[async_trait]
impl IRecommendCropsUseCase for StubRecommendCropsUseCase {
    async fn execute(
        &self,
        _features: SoilFeatures,
    ) -> Result<CropRecommendation, ModelGatewayError> {
        Ok(CropRecommendation {
            primary: CropScore {
                crop: "rice".to_string(),
                confidence: 0.9,
            },
            alternatives: vec![],
        })
    }
}

pub struct StubSubmitFeedbackUseCase;

#[async_trait]
impl ISubmitFeedbackUseCase for StubSubmitFeedbackUseCase {
    async fn execute(
        &self,
        _input: SubmitFeedbackInput,
    ) -> Result<FeedbackRecord, SubmitFeedbackError> {
        Ok(stub_feedback())
    }
}

pub struct StubListFeedbackUseCase;

#[async_trait]
impl IListFeedbackUseCase for StubListFeedbackUseCase {
    async fn execute(
        &self,
        _filters: FeedbackFilters,
    ) -> Result<Vec<FeedbackWithOwner>, ListFeedbackError> {
        Ok(vec![])
    }
}

pub struct StubModerateFeedbackUseCase;

#[async_trait]
impl IModerateFeedbackUseCase for StubModerateFeedbackUseCase {
    async fn execute(
        &self,
        _feedback_id: Uuid,
        _status: &str,
        _admin_response: Option<String>,
    ) -> Result<FeedbackRecord, ModerateFeedbackError> {
        Ok(stub_feedback())
    }
}

pub struct StubDashboardSummaryUseCase;

#[async_trait]
impl IDashboardSummaryUseCase for StubDashboardSummaryUseCase {
    async fn execute(&self) -> Result<DashboardSummary, DashboardSummaryError> {
        Ok(DashboardSummary {
            active_account_count: 0,
            prediction_count: 0,
            feedback_count: 0,
            recent_predictions: vec![],
            disease_distribution: vec![],
        })
    }
}
