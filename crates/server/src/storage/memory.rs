// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: UUIDs generated via uuid v7 (time-ordered)
//
// Same API as the PostgreSQL repository, backed by in-process collections.
// All data is lost on restart.

use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::*;

/// In-memory database for dev mode and tests
#[derive(Default)]
pub struct InMemoryDatabase {
    users: RwLock<HashMap<Uuid, UserRow>>,
    // Vec keeps insertion order for listing
    events: RwLock<Vec<EventRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUserRow) -> Result<UserRow> {
        let row = UserRow {
            id: Uuid::now_v7(),
            username: input.username,
            email: input.email,
            password_hash: input.password_hash,
            created_at: Utc::now(),
        };
        self.users.write().insert(row.id, row.clone());
        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        Ok(self
            .users
            .read()
            .values()
            .filter(|u| u.email == email)
            .min_by_key(|u| u.id)
            .cloned())
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        let row = EventRow {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            date: input.date,
            location: input.location,
            organizer_id: input.organizer_id,
            attendees: input.attendees,
            created_at: Utc::now(),
        };
        self.events.write().push(row.clone());
        Ok(row)
    }

    pub async fn list_events(&self) -> Result<Vec<EventWithOrganizerRow>> {
        let users = self.users.read();
        let events = self.events.read();
        Ok(events
            .iter()
            .map(|event| EventWithOrganizerRow {
                organizer_username: event
                    .organizer_id
                    .and_then(|id| users.get(&id))
                    .map(|u| u.username.clone()),
                event: event.clone(),
            })
            .collect())
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool> {
        let mut events = self.events.write();
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() < before)
    }
}
