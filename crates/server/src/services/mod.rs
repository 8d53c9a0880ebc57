// Services layer for business logic
// Services own business logic, calling storage directly

pub mod auth;
pub mod event;

pub use auth::{AuthService, AuthServiceError, LoginOutcome};
pub use event::{CreateEventInput, EventService};
