//! Calendar event types.
//!
//! Events carry naive local timestamps: calview does no time-zone
//! conversion of its own.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Field, MutationError};

/// Opaque, unique event identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    /// Fresh random id for newly created events.
    pub fn generate() -> Self {
        EventId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

/// A time-ranged calendar event. `start < end` holds for every event the
/// store accepts; see [`CalendarEvent::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Free-form fields owned by the host (colors, location, API ids...)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        CalendarEvent {
            id: id.into(),
            title: title.into(),
            start,
            end,
            metadata: Map::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Check the `start < end` invariant on an event that did not come
    /// from a draft (host data, reloads).
    pub fn validate(&self) -> Result<(), MutationError> {
        if self.start >= self.end {
            return Err(MutationError::validation(
                Field::End,
                format!(
                    "event {}: end ({}) must be after start ({})",
                    self.id, self.end, self.start
                ),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// In-progress form state of the create/edit dialogs.
///
/// A draft never touches the event store until it is submitted and
/// validated; dropping it discards the edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub metadata: Map<String, Value>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        EventDraft {
            title: title.into(),
            start,
            end,
            metadata: Map::new(),
        }
    }

    /// Blank one-hour slot starting at `start`, cut short at the last
    /// representable instant.
    pub fn starting_at(start: NaiveDateTime) -> Self {
        let end = start
            .checked_add_signed(Duration::hours(1))
            .unwrap_or(NaiveDateTime::MAX);
        EventDraft::new(String::new(), start, end)
    }

    pub fn validate(&self) -> Result<(), MutationError> {
        if self.title.trim().is_empty() {
            return Err(MutationError::validation(Field::Title, "title is required"));
        }
        if self.start >= self.end {
            return Err(MutationError::validation(
                Field::End,
                format!("end ({}) must be after start ({})", self.end, self.start),
            ));
        }
        Ok(())
    }

    /// Validate and turn the draft into an event with the given id.
    pub fn into_event(self, id: EventId) -> Result<CalendarEvent, MutationError> {
        self.validate()?;
        Ok(CalendarEvent {
            id,
            title: self.title.trim().to_string(),
            start: self.start,
            end: self.end,
            metadata: self.metadata,
        })
    }
}

impl From<&CalendarEvent> for EventDraft {
    fn from(event: &CalendarEvent) -> Self {
        EventDraft {
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            metadata: event.metadata.clone(),
        }
    }
}
