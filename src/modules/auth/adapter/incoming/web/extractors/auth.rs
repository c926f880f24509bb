use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::services::jwt::JwtService;
use crate::shared::api::ApiResponse;

/// The identity attached to a request by a valid session token.
///
/// Transport rule: a request with NO Authorization header fails with 401,
/// a request with a header whose token is rejected fails with 403. Both
/// deny access; the split lets the client distinguish "log in" from
/// "session expired".
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: Uuid,
    pub username: String,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn verify_bearer(req: &HttpRequest) -> Result<AuthenticatedAccount, ActixError> {
    let jwt_service = match req.app_data::<actix_web::web::Data<Arc<JwtService>>>() {
        Some(service) => service,
        None => {
            return Err(create_api_error(ApiResponse::internal_error()));
        }
    };

    let token = match extract_token_from_header(req) {
        Some(t) => t,
        None => {
            return Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            )));
        }
    };

    match jwt_service.verify_token(&token) {
        Ok(claims) => Ok(AuthenticatedAccount {
            account_id: claims.sub,
            username: claims.username,
            email: claims.email,
        }),
        Err(_) => Err(create_api_error(ApiResponse::forbidden(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))),
    }
}

impl FromRequest for AuthenticatedAccount {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(verify_bearer(req))
    }
}

/// Optional identity for routes open to anonymous callers. No header at
/// all resolves to `None`; a header with a bad token still hard-fails,
/// because a presented-but-rejected token must never be silently ignored.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedAccount>);

impl FromRequest for MaybeAuthenticated {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if extract_token_from_header(req).is_none() {
            return ready(Ok(MaybeAuthenticated(None)));
        }

        ready(verify_bearer(req).map(|account| MaybeAuthenticated(Some(account))))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
