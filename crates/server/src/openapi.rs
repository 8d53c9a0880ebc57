// OpenAPI document generation
//
// Shared by the server (Swagger UI) and the export-openapi binary.

use crate::api;
use crate::api::common::{ErrorResponse, MessageResponse};
use crate::auth;
use eventboard_core::{Event, Organizer, OrganizerSummary, UserProfile};
use utoipa::OpenApi;

/// OpenAPI documentation for the Eventboard API
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::routes::register,
        auth::routes::login,
        api::events::create_event,
        api::events::list_events,
        api::events::delete_event,
    ),
    components(
        schemas(
            Event, Organizer, OrganizerSummary, UserProfile,
            auth::routes::RegisterRequest,
            auth::routes::LoginRequest,
            auth::routes::LoginResponse,
            api::events::CreateEventRequest,
            ErrorResponse, MessageResponse,
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "events", description = "Event management endpoints")
    ),
    info(
        title = "Eventboard API",
        description = "API for registering users and managing events",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI document as a pretty-printed JSON string
    pub fn to_json() -> anyhow::Result<String> {
        Ok(Self::openapi().to_pretty_json()?)
    }
}
