//! The event store controller.
//!
//! `EventStore` is the single source of truth for the displayed event
//! collection and the two draft forms of one backend. Every mutation goes
//! through one of the async operations in this module: the operation
//! suspends at the network call and reconciles local state only after the
//! server has confirmed. A failed call leaves the collection and drafts
//! exactly as they were and logs the error; nothing is retried.
//!
//! Ordering policy at this boundary: the collection is kept
//! most-recent-first. Fetched lists are stored reversed, confirmed creates
//! are prepended, updates keep their entry's position.

mod create;
mod delete;
mod load;
mod update;

#[cfg(test)]
pub(crate) mod fake;

use crate::event::{Event, EventDraft, UpdateDraft};

/// In-memory event collection and draft forms for one backend.
///
/// A store is scoped to one backend name. Switching backends means
/// constructing a fresh store, never re-pointing an existing one; that
/// keeps a late response from the old backend from landing in the new
/// collection.
#[derive(Debug, Default)]
pub struct EventStore {
    backend: String,
    events: Vec<Event>,
    create_draft: EventDraft,
    update_draft: UpdateDraft,
}

impl EventStore {
    pub fn new(backend: impl Into<String>) -> Self {
        EventStore {
            backend: backend.into(),
            ..Default::default()
        }
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// The displayed collection, most recent first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn create_draft(&self) -> &EventDraft {
        &self.create_draft
    }

    pub fn create_draft_mut(&mut self) -> &mut EventDraft {
        &mut self.create_draft
    }

    pub fn update_draft(&self) -> &UpdateDraft {
        &self.update_draft
    }

    pub fn update_draft_mut(&mut self) -> &mut UpdateDraft {
        &mut self.update_draft
    }

    fn position_of(&self, id: i64) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{FakeApi, sample};
    use super::*;

    // Walks the whole lifecycle against one fake backend: initial load,
    // create, targeted update, delete.
    #[tokio::test]
    async fn full_session_reconciles_against_server() {
        let api = FakeApi::with_events(vec![sample(1, "First"), sample(2, "Second")]);
        let mut store = EventStore::new("flask");

        store.load(&api).await.unwrap();
        let ids: Vec<i64> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);

        store.create_draft_mut().name = "A".into();
        let created = store.create(&api).await.unwrap();
        assert_eq!(created.id, 3);
        let ids: Vec<i64> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let draft = store.update_draft_mut();
        draft.id = "2".into();
        draft.name = "B".into();
        store.update(&api).await.unwrap();
        assert_eq!(store.events()[1].name, "B");
        assert_eq!(store.events()[0].name, "A");
        assert_eq!(store.events()[2].name, "First");

        store.delete(&api, 3).await.unwrap();
        let ids: Vec<i64> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
