// Authentication HTTP routes
// Decision: Routes mounted at the root (/register, /login), not under /api
// Decision: Expected failures answer 400 {message}, everything else 500 {error}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use eventboard_core::UserProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AuthState;
use crate::api::common::{ApiError, ErrorResponse, MessageResponse};
use crate::services::AuthServiceError;

/// Register request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Free-text label, empty when omitted
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "a@x.com")]
    pub email: String,
    pub password: String,
}

/// Login response: bearer token plus the public user projection
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

impl From<AuthServiceError> for ApiError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::Store(e) => {
                tracing::error!("Auth storage error: {:#}", e);
                ApiError::internal(&e)
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(state)
}

/// POST /register - Register a new user
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "User already exists", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AuthState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(req) = payload?;

    state
        .service
        .register(req.username, req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// POST /login - Login with email and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "User not found or invalid credentials", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;

    let outcome = state.service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: outcome.user,
    }))
}
