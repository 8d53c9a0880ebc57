// Event service for business logic
//
// Create, list and delete over the event store. Organizer ids are accepted
// without checking that the user exists; listing resolves them for display.

use crate::storage::{
    models::{CreateEventRow, EventRow, EventWithOrganizerRow},
    StorageBackend,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use eventboard_core::{Event, Organizer, OrganizerSummary};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Input for creating an event
#[derive(Debug, Clone, Default)]
pub struct CreateEventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    /// Raw organizer id as received; empty means unset
    pub organizer_id: Option<String>,
}

pub struct EventService {
    db: Arc<StorageBackend>,
}

impl EventService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: CreateEventInput) -> Result<Event> {
        let span = tracing::info_span!("events.create", event.id = tracing::field::Empty);
        self.create_inner(input).instrument(span).await
    }

    async fn create_inner(&self, input: CreateEventInput) -> Result<Event> {
        let organizer_id = match input.organizer_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_id(raw, "organizer")?),
        };

        let row = self
            .db
            .create_event(CreateEventRow {
                title: input.title,
                description: input.description,
                date: input.date,
                location: input.location,
                organizer_id,
                attendees: Vec::new(),
            })
            .await?;

        tracing::Span::current().record("event.id", row.id.to_string().as_str());

        let organizer = row.organizer_id.map(Organizer::Id);
        Ok(Self::row_to_event(row, organizer))
    }

    /// All events with organizers resolved to `{id, username}`
    pub async fn list(&self) -> Result<Vec<Event>> {
        let rows = self.db.list_events().await?;
        Ok(rows.into_iter().map(Self::resolved_row_to_event).collect())
    }

    /// Delete by id. Succeeds whether or not a matching event existed.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = parse_id(id, "_id")?;
        let removed = self.db.delete_event(id).await?;
        tracing::debug!(event.id = %id, removed, "Event delete requested");
        Ok(())
    }

    fn resolved_row_to_event(row: EventWithOrganizerRow) -> Event {
        let organizer = match (row.event.organizer_id, row.organizer_username) {
            (Some(id), Some(username)) => Some(Organizer::User(OrganizerSummary { id, username })),
            (Some(_), None) => Some(Organizer::Unresolved),
            (None, _) => None,
        };
        Self::row_to_event(row.event, organizer)
    }

    fn row_to_event(row: EventRow, organizer: Option<Organizer>) -> Event {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            date: row.date,
            location: row.location,
            organizer,
            attendees: row.attendees,
        }
    }
}

/// Parse a stored identifier, failing the way a store cast error would
fn parse_id(raw: &str, path: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("Cast to id failed for value \"{raw}\" at path \"{path}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::CreateUserRow;
    use chrono::TimeZone;

    fn service() -> (EventService, Arc<StorageBackend>) {
        let db = Arc::new(StorageBackend::in_memory());
        (EventService::new(db.clone()), db)
    }

    async fn create_user(db: &StorageBackend, username: &str) -> Uuid {
        db.create_user(CreateUserRow {
            username: username.to_string(),
            email: format!("{username}@x.com"),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_create_then_list_resolves_organizer() {
        let (svc, db) = service();
        let alice = create_user(&db, "alice").await;
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();

        let created = svc
            .create(CreateEventInput {
                title: Some("Meetup".into()),
                description: Some("Monthly meetup".into()),
                date: Some(date),
                location: Some("Berlin".into()),
                organizer_id: Some(alice.to_string()),
            })
            .await
            .unwrap();
        assert_eq!(created.organizer, Some(Organizer::Id(alice)));

        let events = svc.list().await.unwrap();
        assert_eq!(events.len(), 1);
        let listed = &events[0];
        assert_eq!(listed.id, created.id);
        assert_eq!(listed.title.as_deref(), Some("Meetup"));
        assert_eq!(listed.description.as_deref(), Some("Monthly meetup"));
        assert_eq!(listed.date, Some(date));
        assert_eq!(listed.location.as_deref(), Some("Berlin"));
        assert!(listed.attendees.is_empty());
        assert_eq!(
            listed.organizer,
            Some(Organizer::User(OrganizerSummary {
                id: alice,
                username: "alice".into()
            }))
        );
    }

    #[tokio::test]
    async fn test_create_accepts_unknown_organizer() {
        let (svc, _) = service();
        let ghost = Uuid::now_v7();

        let created = svc
            .create(CreateEventInput {
                organizer_id: Some(ghost.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.organizer, Some(Organizer::Id(ghost)));

        let listed = svc.list().await.unwrap();
        assert_eq!(listed[0].organizer, Some(Organizer::Unresolved));
    }

    #[tokio::test]
    async fn test_create_without_organizer() {
        let (svc, _) = service();
        let created = svc
            .create(CreateEventInput {
                title: Some("Solo".into()),
                organizer_id: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(created.organizer.is_none());
        assert!(svc.list().await.unwrap()[0].organizer.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_organizer() {
        let (svc, _) = service();
        let err = svc
            .create(CreateEventInput {
                organizer_id: Some("not-an-id".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not-an-id"));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let (svc, _) = service();
        let event = svc.create(CreateEventInput::default()).await.unwrap();

        svc.delete(&event.id.to_string()).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());

        // Nothing matched: still succeeds
        svc.delete(&Uuid::now_v7().to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_malformed_id_fails() {
        let (svc, _) = service();
        assert!(svc.delete("42").await.is_err());
    }
}
