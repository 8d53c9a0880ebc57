// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Users
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUserRow {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

// ============================================
// Events
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub organizer_id: Option<Uuid>,
    pub attendees: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateEventRow {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub organizer_id: Option<Uuid>,
    pub attendees: Vec<Uuid>,
}

/// Event row joined with its organizer's username.
/// `organizer_username` is `None` when the organizer is unset or dangling.
#[derive(Debug, Clone, FromRow)]
pub struct EventWithOrganizerRow {
    #[sqlx(flatten)]
    pub event: EventRow,
    pub organizer_username: Option<String>,
}
