// Eventboard core
//
// DB-agnostic domain entities shared by the storage, service and API layers,
// plus telemetry initialization for binaries.

// Telemetry (tracing subscriber + optional OTLP export)
pub mod telemetry;

// Domain entity types
pub mod event;
pub mod user;

pub use event::{Event, Organizer, OrganizerSummary};
pub use user::{User, UserProfile};
