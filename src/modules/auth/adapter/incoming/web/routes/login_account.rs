use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_account::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SessionAccount {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "farmer1")]
    pub username: String,
    #[schema(example = "f1@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponseBody {
    /// Bearer token, valid for 24 hours from issuance
    pub token: String,
    pub account: SessionAccount,
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match &err {
        // One response for unknown email, wrong password and deactivated
        // accounts: the status line must not leak which one happened.
        LoginError::InvalidCredentials => {
            warn!("Login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        other => {
            error!(error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in and obtain a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session issued",
            body = inline(SuccessResponse<LoginResponseBody>)
        ),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_account_handler(
    body: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.login_account_use_case.execute(body.into_inner()).await {
        Ok(response) => ApiResponse::success(LoginResponseBody {
            token: response.token,
            account: SessionAccount {
                id: response.account.id.to_string(),
                username: response.account.username,
                email: response.account.email,
            },
        }),
        Err(err) => map_login_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::login_account::{
        AccountInfo, ILoginAccountUseCase, LoginResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockLoginUseCase {
        outcome: Result<LoginResponse, LoginError>,
    }

    #[async_trait]
    impl ILoginAccountUseCase for MockLoginUseCase {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
            self.outcome.clone()
        }
    }

    async fn call(outcome: Result<LoginResponse, LoginError>) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_login_account(Arc::new(MockLoginUseCase { outcome }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(crate::shared::api::custom_json_config())
                .service(login_account_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(serde_json::json!({
                    "email": "f1@example.com",
                    "password": "pw"
                }))
                .to_request(),
        )
        .await;

        let status = resp.status();
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn successful_login_returns_token() {
        let (status, json) = call(Ok(LoginResponse {
            token: "jwt-token".to_string(),
            account: AccountInfo {
                id: Uuid::new_v4(),
                username: "farmer1".to_string(),
                email: "f1@example.com".to_string(),
            },
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["token"], "jwt-token");
        assert_eq!(json["data"]["account"]["username"], "farmer1");
    }

    #[actix_web::test]
    async fn invalid_credentials_map_to_401() {
        let (status, json) = call(Err(LoginError::InvalidCredentials)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    }
}
