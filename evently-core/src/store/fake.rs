//! In-memory `EventApi` implementation for exercising the store.

use std::cell::RefCell;

use crate::api::EventApi;
use crate::error::{ApiError, ApiResult};
use crate::event::{Event, EventDraft};

/// Serves canned data and records every issued call. A single failure can
/// be queued to hit the rejection path of the next operation.
#[derive(Default)]
pub struct FakeApi {
    pub events: RefCell<Vec<Event>>,
    pub next_id: RefCell<i64>,
    pub failure: RefCell<Option<ApiError>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        FakeApi {
            events: RefCell::new(events),
            next_id: RefCell::new(next_id),
            ..Default::default()
        }
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) -> ApiResult<()> {
        self.calls.borrow_mut().push(call.into());
        match self.failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl EventApi for FakeApi {
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        self.record("list")?;
        Ok(self.events.borrow().clone())
    }

    async fn create_event(&self, draft: &EventDraft) -> ApiResult<Event> {
        self.record(format!("create {:?}", draft.name))?;
        let mut next_id = self.next_id.borrow_mut();
        let event = Event {
            id: *next_id,
            name: draft.name.clone(),
            date: draft.date.clone(),
            location: draft.location.clone(),
            description: draft.description.clone(),
        };
        *next_id += 1;
        self.events.borrow_mut().push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: i64, fields: &EventDraft) -> ApiResult<()> {
        self.record(format!("update {id}"))?;
        if let Some(event) = self.events.borrow_mut().iter_mut().find(|e| e.id == id) {
            event.apply(fields);
        }
        // Unknown ids are acknowledged all the same, like the reference
        // backend this store was written against.
        Ok(())
    }

    async fn delete_event(&self, id: i64) -> ApiResult<()> {
        self.record(format!("delete {id}"))?;
        let mut events = self.events.borrow_mut();
        match events.iter().position(|e| e.id == id) {
            Some(pos) => {
                events.remove(pos);
                Ok(())
            }
            None => Err(not_found()),
        }
    }

    async fn get_event(&self, id: i64) -> ApiResult<Event> {
        self.record(format!("get {id}"))?;
        self.events
            .borrow()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn health_check(&self) -> ApiResult<()> {
        self.record("health")
    }
}

pub fn not_found() -> ApiError {
    ApiError::Rejected {
        status: 404,
        message: "event not found".into(),
    }
}

pub fn transport_down() -> ApiError {
    ApiError::Transport("connection refused".into())
}

pub fn sample(id: i64, name: &str) -> Event {
    Event {
        id,
        name: name.into(),
        date: "2026-09-01".into(),
        location: "Lisbon".into(),
        description: format!("{name} description"),
    }
}
