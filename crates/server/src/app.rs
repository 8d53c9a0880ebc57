// Router assembly
// Decision: Permissive CORS, the API is consumed by a browser UI on another origin

use crate::api;
use crate::auth::{self, AuthConfig, AuthState};
use crate::openapi::ApiDoc;
use crate::storage::StorageBackend;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Liveness text served at `/`
pub const LIVENESS_MESSAGE: &str = "Backend is Running!";

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Build the full application router over a shared storage handle
pub fn build_router(db: Arc<StorageBackend>, auth_config: &AuthConfig) -> Router {
    let auth_state = AuthState::new(auth_config, db.clone());
    let events_state = api::events::AppState::new(db);

    Router::new()
        .route("/", get(liveness))
        .merge(auth::routes(auth_state))
        .merge(api::events::routes(events_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
