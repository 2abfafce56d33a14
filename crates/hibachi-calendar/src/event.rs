//! Calendar events as supplied by the host.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single reservation (or any time-stamped item) shown on the calendar.
///
/// Timestamps are local wall-clock times. `end >= start` is expected but not
/// enforced; degenerate events still render at the minimum visible span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable identifier, unique within one event list.
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Host metadata (customer, party size, address...). Never interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            notes: None,
            extra: Map::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Parse a host timestamp into a local wall-clock datetime.
///
/// Accepts `2024-06-12T09:15:00`, `2024-06-12T09:15` and `2024-06-12 09:15:00`.
/// An RFC 3339 offset (e.g. `2024-06-12T09:15:00-07:00`) is accepted and its
/// local clock reading is kept; no UTC conversion happens.
pub fn parse_local_datetime(s: &str) -> crate::Result<NaiveDateTime> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

    let trimmed = s.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| crate::CalendarError::InvalidDateTime(s.to_string()))
}

/// Parse a host date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> crate::Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| crate::CalendarError::InvalidDateTime(format!("{s}: {e}")))
}

/// Parse a JSON array of events.
pub fn parse_events_json(json: &str) -> crate::Result<Vec<CalendarEvent>> {
    Ok(serde_json::from_str(json)?)
}
