// Event HTTP routes
// Decision: No authentication on any event route, mutating ones included

use crate::services::{CreateEventInput, EventService};
use crate::storage::StorageBackend;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use eventboard_core::event::{deserialize_optional_date, deserialize_optional_text};
use eventboard_core::Event;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{ApiError, ErrorResponse, MessageResponse};

/// Request to create an event
///
/// Text fields also take numbers and booleans, stored as their JSON text.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[schema(example = "Meetup")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[schema(example = "Monthly community meetup")]
    pub description: Option<String>,
    /// RFC 3339 timestamp, timezone-less date-time (UTC), `YYYY-MM-DD`,
    /// or epoch milliseconds.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[schema(value_type = Option<String>, example = "2025-06-01T18:00:00Z")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[schema(example = "Community hall")]
    pub location: Option<String>,
    /// Id of the organizing user. Not checked for existence.
    #[serde(default)]
    pub organizer_id: Option<String>,
}

impl From<CreateEventRequest> for CreateEventInput {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            organizer_id: req.organizer_id,
        }
    }
}

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/events", post(create_event).get(list_events))
        .route("/api/events/:id", delete(delete_event))
        .with_state(state)
}

/// POST /api/events - Create an event
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let Json(req) = payload?;

    let event = state.service.create(req.into()).await.map_err(|e| {
        tracing::error!("Failed to create event: {:#}", e);
        ApiError::internal(&e)
    })?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/events - List all events with organizers resolved
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events", body = Vec<Event>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list events: {:#}", e);
        ApiError::internal(&e)
    })?;

    Ok(Json(events))
}

/// DELETE /api/events/{id} - Delete an event
///
/// Responds with the same message whether or not the event existed.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(&id).await.map_err(|e| {
        tracing::error!("Failed to delete event {}: {:#}", id, e);
        ApiError::internal(&e)
    })?;

    Ok(Json(MessageResponse::new("Event deleted")))
}
