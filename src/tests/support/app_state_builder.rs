use std::sync::Arc;

use crate::modules::auth::application::use_cases::deactivate_account::IDeactivateAccountUseCase;
use crate::modules::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::modules::auth::application::use_cases::login_account::ILoginAccountUseCase;
use crate::modules::auth::application::use_cases::register_account::IRegisterAccountUseCase;
use crate::modules::auth::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::modules::feedback::application::use_cases::list_feedback::IListFeedbackUseCase;
use crate::modules::feedback::application::use_cases::moderate_feedback::IModerateFeedbackUseCase;
use crate::modules::feedback::application::use_cases::submit_feedback::ISubmitFeedbackUseCase;
use crate::modules::prediction::application::use_cases::fetch_prediction_history::IFetchHistoryUseCase;
use crate::modules::prediction::application::use_cases::record_prediction::IRecordPredictionUseCase;
use crate::modules::prediction::application::use_cases::recommend_crops::IRecommendCropsUseCase;
use crate::modules::prediction::application::use_cases::search_predictions::ISearchPredictionsUseCase;
use crate::modules::prediction::application::use_cases::verify_prediction::IVerifyPredictionUseCase;
use crate::modules::stats::application::use_cases::dashboard_summary::IDashboardSummaryUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a benign stub; tests swap
/// in a real mock for just the handler under test.
pub struct TestAppStateBuilder {
    register_account: Arc<dyn IRegisterAccountUseCase>,
    login_account: Arc<dyn ILoginAccountUseCase>,
    fetch_profile: Arc<dyn IFetchProfileUseCase>,
    update_profile: Arc<dyn IUpdateProfileUseCase>,
    deactivate_account: Arc<dyn IDeactivateAccountUseCase>,
    record_prediction: Arc<dyn IRecordPredictionUseCase>,
    fetch_history: Arc<dyn IFetchHistoryUseCase>,
    search_predictions: Arc<dyn ISearchPredictionsUseCase>,
    verify_prediction: Arc<dyn IVerifyPredictionUseCase>,
    recommend_crops: Arc<dyn IRecommendCropsUseCase>,
    submit_feedback: Arc<dyn ISubmitFeedbackUseCase>,
    list_feedback: Arc<dyn IListFeedbackUseCase>,
    moderate_feedback: Arc<dyn IModerateFeedbackUseCase>,
    dashboard_summary: Arc<dyn IDashboardSummaryUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_account: Arc::new(StubRegisterAccountUseCase),
            login_account: Arc::new(StubLoginAccountUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            deactivate_account: Arc::new(StubDeactivateAccountUseCase),
            record_prediction: Arc::new(StubRecordPredictionUseCase),
            fetch_history: Arc::new(StubFetchHistoryUseCase),
            search_predictions: Arc::new(StubSearchPredictionsUseCase),
            verify_prediction: Arc::new(StubVerifyPredictionUseCase),
            recommend_crops: Arc::new(StubRecommendCropsUseCase),
            submit_feedback: Arc::new(StubSubmitFeedbackUseCase),
            list_feedback: Arc::new(StubListFeedbackUseCase),
            moderate_feedback: Arc::new(StubModerateFeedbackUseCase),
            dashboard_summary: Arc::new(StubDashboardSummaryUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_account(mut self, use_case: Arc<dyn IRegisterAccountUseCase>) -> Self {
        self.register_account = use_case;
        self
    }

    pub fn with_login_account(mut self, use_case: Arc<dyn ILoginAccountUseCase>) -> Self {
        self.login_account = use_case;
        self
    }

    pub fn with_fetch_profile(mut self, use_case: Arc<dyn IFetchProfileUseCase>) -> Self {
        self.fetch_profile = use_case;
        self
    }

    pub fn with_update_profile(mut self, use_case: Arc<dyn IUpdateProfileUseCase>) -> Self {
        self.update_profile = use_case;
        self
    }

    pub fn with_deactivate_account(
        mut self,
        use_case: Arc<dyn IDeactivateAccountUseCase>,
    ) -> Self {
        self.deactivate_account = use_case;
        self
    }

    pub fn with_record_prediction(mut self, use_case: Arc<dyn IRecordPredictionUseCase>) -> Self {
        self.record_prediction = use_case;
        self
    }

    pub fn with_fetch_history(mut self, use_case: Arc<dyn IFetchHistoryUseCase>) -> Self {
        self.fetch_history = use_case;
        self
    }

    pub fn with_search_predictions(
        mut self,
        use_case: Arc<dyn ISearchPredictionsUseCase>,
    ) -> Self {
        self.search_predictions = use_case;
        self
    }

    pub fn with_verify_prediction(mut self, use_case: Arc<dyn IVerifyPredictionUseCase>) -> Self {
        self.verify_prediction = use_case;
        self
    }

    pub fn with_recommend_crops(mut self, use_case: Arc<dyn IRecommendCropsUseCase>) -> Self {
        self.recommend_crops = use_case;
        self
    }

    pub fn with_submit_feedback(mut self, use_case: Arc<dyn ISubmitFeedbackUseCase>) -> Self {
        self.submit_feedback = use_case;
        self
    }

    pub fn with_list_feedback(mut self, use_case: Arc<dyn IListFeedbackUseCase>) -> Self {
        self.list_feedback = use_case;
        self
    }

    pub fn with_moderate_feedback(mut self, use_case: Arc<dyn IModerateFeedbackUseCase>) -> Self {
        self.moderate_feedback = use_case;
        self
    }

    pub fn with_dashboard_summary(mut self, use_case: Arc<dyn IDashboardSummaryUseCase>) -> Self {
        self.dashboard_summary = use_case;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            register_account_use_case: self.register_account,
            login_account_use_case: self.login_account,
            fetch_profile_use_case: self.fetch_profile,
            update_profile_use_case: self.update_profile,
            deactivate_account_use_case: self.deactivate_account,
            record_prediction_use_case: self.record_prediction,
            fetch_history_use_case: self.fetch_history,
            search_predictions_use_case: self.search_predictions,
            verify_prediction_use_case: self.verify_prediction,
            recommend_crops_use_case: self.recommend_crops,
            submit_feedback_use_case: self.submit_feedback,
            list_feedback_use_case: self.list_feedback,
            moderate_feedback_use_case: self.moderate_feedback,
            dashboard_summary_use_case: self.dashboard_summary,
        }
    }
}
