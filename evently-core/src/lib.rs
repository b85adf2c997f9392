//! Core types and synchronization logic for the evently ecosystem.
//!
//! This crate provides everything that is independent of the HTTP transport:
//! - `Event` and the two draft form types
//! - the `EventApi` trait implemented by remote clients
//! - the `EventStore` controller that reconciles the local collection
//!   with confirmed server responses

pub mod api;
pub mod error;
pub mod event;
pub mod store;

pub use api::EventApi;
pub use error::{ApiError, ApiResult};
pub use event::{Event, EventDraft, UpdateDraft};
pub use store::EventStore;
