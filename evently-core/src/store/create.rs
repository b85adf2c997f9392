//! Submitting the create draft.

use super::EventStore;
use crate::api::EventApi;
use crate::error::ApiResult;
use crate::event::Event;

impl EventStore {
    /// Submit the create draft.
    ///
    /// The draft is sent verbatim: no trimming, no field defaults. On a
    /// confirmed response the server-assigned event is prepended to the
    /// collection and the draft resets to empty fields. On failure both
    /// collection and draft are left untouched so the same input can be
    /// resubmitted.
    pub async fn create(&mut self, api: &impl EventApi) -> ApiResult<Event> {
        match api.create_event(&self.create_draft).await {
            Ok(created) => {
                self.events.insert(0, created.clone());
                self.create_draft.clear();
                Ok(created)
            }
            Err(err) => {
                tracing::error!(backend = %self.backend, %err, "failed to create event");
                Err(err)
            }
        }
    }
}
