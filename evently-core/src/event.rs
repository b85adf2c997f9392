//! Event record and draft form types.
//!
//! `Event` mirrors the backend's JSON shape exactly. The draft types hold
//! uncommitted form input: they are cleared only after a confirmed
//! submission, so a failed request leaves the entered values available
//! for retry.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// An event record as stored by the backend.
///
/// `id` is assigned by the server on create and never changes afterwards.
/// The four text fields are free-form; no format is enforced client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl Event {
    /// Overwrite the four text fields from a draft, keeping the id.
    pub fn apply(&mut self, fields: &EventDraft) {
        self.name = fields.name.clone();
        self.date = fields.date.clone();
        self.location = fields.location.clone();
        self.description = fields.description.clone();
    }
}

/// Uncommitted input for the create form.
///
/// Also serves as the request body for create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl EventDraft {
    /// Reset all four fields to empty strings.
    pub fn clear(&mut self) {
        *self = EventDraft::default();
    }
}

/// Uncommitted input for the update form.
///
/// `id` is free text selecting the target event; it is parsed to an
/// integer at submit time and never included in the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDraft {
    pub id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl UpdateDraft {
    /// Parse the free-text id field into the target event id.
    pub fn target_id(&self) -> ApiResult<i64> {
        self.id
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidEventId(self.id.clone()))
    }

    /// The four text fields as a request payload (id excluded).
    pub fn fields(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            date: self.date.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }

    /// Reset all fields to empty strings.
    pub fn clear(&mut self) {
        *self = UpdateDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_matches_wire_shape() {
        let json = r#"{
            "id": 7,
            "name": "Team offsite",
            "date": "2026-09-12",
            "location": "Lisbon",
            "description": "Annual planning"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.name, "Team offsite");

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["id"], 7);
        assert_eq!(back["location"], "Lisbon");
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = UpdateDraft {
            id: "3".into(),
            name: "Renamed".into(),
            ..Default::default()
        };

        let body = serde_json::to_value(draft.fields()).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Renamed");
        assert_eq!(body["date"], "");
    }

    #[test]
    fn target_id_parses_or_rejects() {
        let mut draft = UpdateDraft {
            id: " 42 ".into(),
            ..Default::default()
        };
        assert_eq!(draft.target_id().unwrap(), 42);

        draft.id = "not-a-number".into();
        assert_eq!(
            draft.target_id(),
            Err(ApiError::InvalidEventId("not-a-number".into()))
        );
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = EventDraft {
            name: "a".into(),
            date: "b".into(),
            location: "c".into(),
            description: "d".into(),
        };
        draft.clear();
        assert_eq!(draft, EventDraft::default());
    }

    #[test]
    fn apply_preserves_id() {
        let mut event = Event {
            id: 9,
            name: "Old".into(),
            date: "2026-01-01".into(),
            location: "Here".into(),
            description: String::new(),
        };
        event.apply(&EventDraft {
            name: "New".into(),
            date: "2026-02-02".into(),
            location: "There".into(),
            description: "Moved".into(),
        });

        assert_eq!(event.id, 9);
        assert_eq!(event.name, "New");
        assert_eq!(event.location, "There");
    }
}
