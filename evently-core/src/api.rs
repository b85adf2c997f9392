//! The seam between the store controller and a concrete remote client.

use crate::error::ApiResult;
use crate::event::{Event, EventDraft};

/// The CRUD intents plus the two auxiliary probes an event backend exposes.
///
/// Implementations perform exactly one round trip per call: no retries,
/// no request deduplication, no timeout overrides. Each call resolves to
/// either a parsed result or an error; the store decides what to do with
/// the outcome.
///
/// Callers hold implementations generically, never as trait objects, so
/// plain `async fn` works here.
#[allow(async_fn_in_trait)]
pub trait EventApi {
    /// Fetch every event, in the server's own order.
    async fn list_events(&self) -> ApiResult<Vec<Event>>;

    /// Create an event from the draft; the server assigns the id.
    async fn create_event(&self, draft: &EventDraft) -> ApiResult<Event>;

    /// Overwrite the four text fields of the event with the given id.
    async fn update_event(&self, id: i64, fields: &EventDraft) -> ApiResult<()>;

    /// Delete the event with the given id.
    async fn delete_event(&self, id: i64) -> ApiResult<()>;

    /// Fetch a single event by id.
    async fn get_event(&self, id: i64) -> ApiResult<Event>;

    /// Probe whether the backend is reachable.
    async fn health_check(&self) -> ApiResult<()>;
}
