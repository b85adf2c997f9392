//! Wholesale (re)population of the collection.

use super::EventStore;
use crate::api::EventApi;
use crate::error::ApiResult;
use crate::event::Event;

impl EventStore {
    /// Replace the entire collection with the backend's current list.
    ///
    /// The server returns events oldest-first; the store keeps them
    /// most-recent-first, so the fetched list is stored reversed. On
    /// failure the previous collection (empty on first load) stays in
    /// place and no retry is scheduled.
    pub async fn load(&mut self, api: &impl EventApi) -> ApiResult<()> {
        match api.list_events().await {
            Ok(mut events) => {
                events.reverse();
                self.events = events;
                Ok(())
            }
            Err(err) => {
                tracing::error!(backend = %self.backend, %err, "failed to fetch events");
                Err(err)
            }
        }
    }

    /// Re-fetch a single event and replace the local copy in place.
    ///
    /// The entry keeps its position in the collection; an id the store
    /// does not hold leaves the collection untouched.
    pub async fn refresh_one(&mut self, api: &impl EventApi, id: i64) -> ApiResult<Event> {
        match api.get_event(id).await {
            Ok(event) => {
                if let Some(pos) = self.position_of(id) {
                    self.events[pos] = event.clone();
                }
                Ok(event)
            }
            Err(err) => {
                tracing::error!(backend = %self.backend, event_id = id, %err, "failed to fetch event");
                Err(err)
            }
        }
    }
}
