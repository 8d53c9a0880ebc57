// HTTP API routes
//
// Each submodule handles one resource with its own AppState.
// Auth routes live in crate::auth.

pub mod common;
pub mod events;

pub use common::{ApiError, ErrorResponse, MessageResponse};
