pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::feedback;
pub use modules::prediction;
pub use modules::stats;

use crate::auth::adapter::outgoing::account_query_postgres::AccountQueryPostgres;
use crate::auth::adapter::outgoing::account_repository_postgres::AccountRepositoryPostgres;
use crate::auth::application::ports::outgoing::AccountQuery;
use crate::auth::application::services::hash::{Argon2Hasher, PasswordHashingService};
use crate::auth::application::services::jwt::{JwtConfig, JwtService};
use crate::auth::application::use_cases::{
    deactivate_account::{DeactivateAccountUseCase, IDeactivateAccountUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_account::{ILoginAccountUseCase, LoginAccountUseCase},
    register_account::{IRegisterAccountUseCase, RegisterAccountUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use crate::prediction::adapter::outgoing::model_gateway_http::HttpModelGateway;
use crate::prediction::adapter::outgoing::prediction_query_postgres::PredictionQueryPostgres;
use crate::prediction::adapter::outgoing::prediction_repository_postgres::PredictionRepositoryPostgres;
use crate::prediction::application::ports::outgoing::ModelGateway;
use crate::prediction::application::use_cases::{
    fetch_prediction_history::{FetchHistoryUseCase, IFetchHistoryUseCase},
    record_prediction::{IRecordPredictionUseCase, RecordPredictionUseCase},
    recommend_crops::{IRecommendCropsUseCase, RecommendCropsUseCase},
    search_predictions::{ISearchPredictionsUseCase, SearchPredictionsUseCase},
    verify_prediction::{IVerifyPredictionUseCase, VerifyPredictionUseCase},
};

use crate::feedback::adapter::outgoing::feedback_query_postgres::FeedbackQueryPostgres;
use crate::feedback::adapter::outgoing::feedback_repository_postgres::FeedbackRepositoryPostgres;
use crate::feedback::application::use_cases::{
    list_feedback::{IListFeedbackUseCase, ListFeedbackUseCase},
    moderate_feedback::{IModerateFeedbackUseCase, ModerateFeedbackUseCase},
    submit_feedback::{ISubmitFeedbackUseCase, SubmitFeedbackUseCase},
};

use crate::stats::adapter::outgoing::stats_query_postgres::StatsQueryPostgres;
use crate::stats::application::use_cases::dashboard_summary::{
    DashboardSummaryUseCase, IDashboardSummaryUseCase,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_account_use_case: Arc<dyn IRegisterAccountUseCase>,
    pub login_account_use_case: Arc<dyn ILoginAccountUseCase>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase>,
    pub deactivate_account_use_case: Arc<dyn IDeactivateAccountUseCase>,
    pub record_prediction_use_case: Arc<dyn IRecordPredictionUseCase>,
    pub fetch_history_use_case: Arc<dyn IFetchHistoryUseCase>,
    pub search_predictions_use_case: Arc<dyn ISearchPredictionsUseCase>,
    pub verify_prediction_use_case: Arc<dyn IVerifyPredictionUseCase>,
    pub recommend_crops_use_case: Arc<dyn IRecommendCropsUseCase>,
    pub submit_feedback_use_case: Arc<dyn ISubmitFeedbackUseCase>,
    pub list_feedback_use_case: Arc<dyn IListFeedbackUseCase>,
    pub moderate_feedback_use_case: Arc<dyn IModerateFeedbackUseCase>,
    pub dashboard_summary_use_case: Arc<dyn IDashboardSummaryUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection: the pool is the process's only shared mutable
    // resource, bounded and recycled here.
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let jwt_service = Arc::new(JwtService::new(JwtConfig::from_env()));

    let argon2_password_hasher = if std::env::var("RUST_ENV").as_deref() == Ok("production") {
        Argon2Hasher::budget_vps()
    } else {
        Argon2Hasher::fast_env()
    };
    let password_hasher = PasswordHashingService::with_hasher(argon2_password_hasher);

    // Auth wiring
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let account_query_arc: Arc<dyn AccountQuery> = Arc::new(account_query.clone());

    let register_account_use_case = RegisterAccountUseCase::new(
        account_query.clone(),
        account_repo.clone(),
        password_hasher.clone(),
    );
    let login_account_use_case = LoginAccountUseCase::new(
        account_query.clone(),
        password_hasher.clone(),
        jwt_service.as_ref().clone(),
    );
    let fetch_profile_use_case = FetchProfileUseCase::new(account_query.clone());
    let update_profile_use_case =
        UpdateProfileUseCase::new(account_query.clone(), account_repo.clone());
    let deactivate_account_use_case =
        DeactivateAccountUseCase::new(account_query, account_repo, password_hasher);

    // Prediction wiring
    let model_gateway: Arc<dyn ModelGateway> = Arc::new(HttpModelGateway::from_env());
    let prediction_repo = PredictionRepositoryPostgres::new(Arc::clone(&db_arc));
    let prediction_query = PredictionQueryPostgres::new(Arc::clone(&db_arc));

    let record_prediction_use_case = RecordPredictionUseCase::new(
        prediction_repo.clone(),
        Arc::clone(&account_query_arc),
        Arc::clone(&model_gateway),
    );
    let fetch_history_use_case = FetchHistoryUseCase::new(prediction_query.clone());
    let search_predictions_use_case = SearchPredictionsUseCase::new(prediction_query.clone());
    let verify_prediction_use_case =
        VerifyPredictionUseCase::new(prediction_query, prediction_repo);
    let recommend_crops_use_case = RecommendCropsUseCase::new(model_gateway);

    // Feedback wiring
    let feedback_repo = FeedbackRepositoryPostgres::new(Arc::clone(&db_arc));
    let feedback_query = FeedbackQueryPostgres::new(Arc::clone(&db_arc));

    let submit_feedback_use_case =
        SubmitFeedbackUseCase::new(feedback_repo.clone(), Arc::clone(&account_query_arc));
    let list_feedback_use_case = ListFeedbackUseCase::new(feedback_query.clone());
    let moderate_feedback_use_case = ModerateFeedbackUseCase::new(feedback_query, feedback_repo);

    // Stats wiring
    let dashboard_summary_use_case =
        DashboardSummaryUseCase::new(StatsQueryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        register_account_use_case: Arc::new(register_account_use_case),
        login_account_use_case: Arc::new(login_account_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        deactivate_account_use_case: Arc::new(deactivate_account_use_case),
        record_prediction_use_case: Arc::new(record_prediction_use_case),
        fetch_history_use_case: Arc::new(fetch_history_use_case),
        search_predictions_use_case: Arc::new(search_predictions_use_case),
        verify_prediction_use_case: Arc::new(verify_prediction_use_case),
        recommend_crops_use_case: Arc::new(recommend_crops_use_case),
        submit_feedback_use_case: Arc::new(submit_feedback_use_case),
        list_feedback_use_case: Arc::new(list_feedback_use_case),
        moderate_feedback_use_case: Arc::new(moderate_feedback_use_case),
        dashboard_summary_use_case: Arc::new(dashboard_summary_use_case),
    };

    info!("Server run on: {}", server_url);

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&jwt_service)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_account_handler);
    // User
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::deactivate_account_handler);
    // Crops
    cfg.service(crate::prediction::adapter::incoming::web::routes::predict_handler);
    cfg.service(crate::prediction::adapter::incoming::web::routes::recommend_crops_handler);
    cfg.service(crate::prediction::adapter::incoming::web::routes::list_own_predictions_handler);
    cfg.service(crate::prediction::adapter::incoming::web::routes::search_predictions_handler);
    cfg.service(crate::prediction::adapter::incoming::web::routes::verify_prediction_handler);
    // Feedback
    cfg.service(crate::feedback::adapter::incoming::web::routes::submit_feedback_handler);
    cfg.service(crate::feedback::adapter::incoming::web::routes::list_feedback_handler);
    cfg.service(crate::feedback::adapter::incoming::web::routes::moderate_feedback_handler);
    // Stats
    cfg.service(crate::stats::adapter::incoming::web::routes::dashboard_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
