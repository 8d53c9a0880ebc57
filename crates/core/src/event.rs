// Event domain types
//
// Events carry weak references to users: `organizer` and `attendees` hold
// user ids that are never checked for existence. The organizer is resolved
// to a summary on read when listing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Minimal view of the user organizing an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct OrganizerSummary {
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
}

/// Organizer reference as it appears on the wire.
/// - `Id`: bare user id (create response)
/// - `User`: resolved `{id, username}` (list response)
/// - `Unresolved`: the referenced user does not exist, serialized as `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(untagged)]
pub enum Organizer {
    Id(Uuid),
    User(OrganizerSummary),
    Unresolved,
}

/// Event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    /// Unique identifier assigned on creation.
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Meetup"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the event takes place. No timezone or range validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Organizing user. Omitted when unset, `null` when the user does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Organizer>,
    /// Attending user ids, in insertion order.
    #[serde(default)]
    pub attendees: Vec<Uuid>,
}

/// Timezone-less layouts, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an event date.
///
/// Accepts RFC 3339 timestamps, timezone-less date-times (`2025-06-01T18:30`,
/// `2025-06-01 18:30:00`, read as UTC) and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_event_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Loosely typed JSON scalar accepted for free-text and date fields
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Serde helper for optional request dates.
///
/// Strings go through [`parse_event_date`], numbers are epoch milliseconds.
/// `null` and empty strings deserialize to `None`.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Scalar>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Scalar::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(Scalar::Text(s)) => parse_event_date(&s).ok_or(s),
        Some(Scalar::Int(ms)) => DateTime::from_timestamp_millis(ms).ok_or(ms.to_string()),
        Some(Scalar::Float(ms)) => {
            DateTime::from_timestamp_millis(ms as i64).ok_or(ms.to_string())
        }
        Some(Scalar::Bool(b)) => Err(b.to_string()),
    };
    parsed
        .map(Some)
        .map_err(|raw| serde::de::Error::custom(format!("invalid date: {raw}")))
}

/// Serde helper for optional free-text fields.
///
/// Numbers and booleans are kept as their JSON text.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "deserialize_optional_text")]
        title: Option<String>,
    }

    fn loose(value: serde_json::Value) -> Result<Loose, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_parse_rfc3339_date() {
        let parsed = parse_event_date("2025-06-01T18:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 16, 30, 0).unwrap());

        let parsed = parse_event_date("2025-06-01T18:30:00.000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_plain_date() {
        let parsed = parse_event_date("2025-06-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timezone_less_datetimes_as_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap();
        for raw in [
            "2025-06-01T18:30",
            "2025-06-01T18:30:00",
            "2025-06-01 18:30:00",
            "2025-06-01 18:30",
        ] {
            assert_eq!(parse_event_date(raw), Some(expected), "{raw}");
        }

        let parsed = parse_event_date("2025-06-01T18:30:00.250").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(parse_event_date("next tuesday").is_none());
        assert!(parse_event_date("2025-13-01T10:00").is_none());
        assert!(parse_event_date("").is_none());
    }

    #[test]
    fn test_date_field_accepts_epoch_millis() {
        let parsed = loose(serde_json::json!({"date": 1748802600000_i64})).unwrap();
        assert_eq!(
            parsed.date,
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_date_field_empty_and_null_are_absent() {
        assert!(loose(serde_json::json!({"date": ""})).unwrap().date.is_none());
        assert!(loose(serde_json::json!({"date": null})).unwrap().date.is_none());
        assert!(loose(serde_json::json!({})).unwrap().date.is_none());
    }

    #[test]
    fn test_date_field_rejects_garbage() {
        let err = loose(serde_json::json!({"date": "soon"})).unwrap_err();
        assert!(err.to_string().contains("invalid date: soon"));
        assert!(loose(serde_json::json!({"date": true})).is_err());
    }

    #[test]
    fn test_text_field_keeps_scalars_as_text() {
        assert_eq!(
            loose(serde_json::json!({"title": 2025})).unwrap().title.as_deref(),
            Some("2025")
        );
        assert_eq!(
            loose(serde_json::json!({"title": 1.5})).unwrap().title.as_deref(),
            Some("1.5")
        );
        assert_eq!(
            loose(serde_json::json!({"title": false})).unwrap().title.as_deref(),
            Some("false")
        );
        assert!(loose(serde_json::json!({"title": null})).unwrap().title.is_none());
        assert!(loose(serde_json::json!({"title": ["a"]})).is_err());
    }

    #[test]
    fn test_organizer_wire_format() {
        let id = Uuid::now_v7();

        let bare = serde_json::to_value(Organizer::Id(id)).unwrap();
        assert_eq!(bare, serde_json::json!(id.to_string()));

        let resolved = serde_json::to_value(Organizer::User(OrganizerSummary {
            id,
            username: "alice".to_string(),
        }))
        .unwrap();
        assert_eq!(resolved["id"], id.to_string());
        assert_eq!(resolved["username"], "alice");

        let back: Organizer = serde_json::from_value(resolved).unwrap();
        assert!(matches!(back, Organizer::User(ref s) if s.id == id));

        assert!(serde_json::to_value(Organizer::Unresolved).unwrap().is_null());
    }

    #[test]
    fn test_event_serialization_skips_missing_fields() {
        let mut event = Event {
            id: Uuid::now_v7(),
            title: Some("Meetup".to_string()),
            description: None,
            date: None,
            location: None,
            organizer: None,
            attendees: vec![],
        };

        let json = serde_json::to_value(&event).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(json["title"], "Meetup");
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("organizer"));
        assert_eq!(json["attendees"], serde_json::json!([]));

        event.organizer = Some(Organizer::Unresolved);
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.as_object().unwrap().contains_key("organizer"));
        assert!(json["organizer"].is_null());
    }
}
