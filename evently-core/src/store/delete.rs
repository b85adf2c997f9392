//! Deleting a confirmed event.

use super::EventStore;
use crate::api::EventApi;
use crate::error::ApiResult;

impl EventStore {
    /// Delete the event with the given id.
    ///
    /// Local removal happens only after the server acknowledges; a failed
    /// call leaves the collection untouched.
    pub async fn delete(&mut self, api: &impl EventApi, id: i64) -> ApiResult<()> {
        match api.delete_event(id).await {
            Ok(()) => {
                self.events.retain(|e| e.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::error!(backend = %self.backend, event_id = id, %err, "failed to delete event");
                Err(err)
            }
        }
    }
}
