//! Submitting the update draft.

use super::EventStore;
use crate::api::EventApi;
use crate::error::ApiResult;

impl EventStore {
    /// Submit the update draft.
    ///
    /// The draft's id text must parse as an integer; if it does not, the
    /// submission fails locally before any request is issued and the draft
    /// is kept. On a confirmed response the draft's four fields are merged
    /// into the matching entry (id and position preserved) and the draft
    /// resets; a parsed id with no matching entry still counts as success,
    /// so the only local effect is the draft reset. On failure both
    /// collection and draft are left untouched.
    pub async fn update(&mut self, api: &impl EventApi) -> ApiResult<()> {
        let id = match self.update_draft.target_id() {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(backend = %self.backend, %err, "rejecting update submission");
                return Err(err);
            }
        };

        let fields = self.update_draft.fields();
        match api.update_event(id, &fields).await {
            Ok(()) => {
                if let Some(pos) = self.position_of(id) {
                    self.events[pos].apply(&fields);
                }
                self.update_draft.clear();
                Ok(())
            }
            Err(err) => {
                tracing::error!(backend = %self.backend, event_id = id, %err, "failed to update event");
                Err(err)
            }
        }
    }
}
