//! HTTP client for an evently REST backend.
//!
//! Thin protocol adapter: each method is exactly one round trip against
//! `{api_url}/api/{backend}/...` with no retries, no timeout overrides and
//! no request deduplication.

use evently_core::{ApiError, ApiResult, Event, EventApi, EventDraft};
use serde::Deserialize;

/// reqwest-backed implementation of [`EventApi`], scoped to one backend
/// namespace.
pub struct Client {
    http: reqwest::Client,
    api_url: String,
    backend: String,
}

/// Error body returned by the backend on non-2xx responses.
///
/// `message` is a short summary ("error creating event"); `error` carries
/// the detail and is only present on server faults.
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Single-event responses arrive wrapped: `{"event": {...}}`.
#[derive(Deserialize)]
struct EventEnvelope {
    event: Event,
}

impl Client {
    pub fn new(api_url: impl Into<String>, backend: impl Into<String>) -> Self {
        Client {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            backend: backend.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}/{}", self.api_url, self.backend, path)
    }

    fn transport(err: reqwest::Error) -> ApiError {
        ApiError::Transport(err.to_string())
    }

    /// Pass 2xx responses through; decode anything else into a rejection,
    /// preferring the backend's `error` detail over its `message` summary.
    async fn check(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error.or(body.message).unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

impl EventApi for Client {
    /// GET /api/:backend/events
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        let resp = self
            .http
            .get(self.url("events"))
            .send()
            .await
            .map_err(Self::transport)?;
        let resp = Self::check(resp).await?;
        resp.json().await.map_err(Self::transport)
    }

    /// POST /api/:backend/event
    async fn create_event(&self, draft: &EventDraft) -> ApiResult<Event> {
        let resp = self
            .http
            .post(self.url("event"))
            .json(draft)
            .send()
            .await
            .map_err(Self::transport)?;
        let resp = Self::check(resp).await?;
        resp.json().await.map_err(Self::transport)
    }

    /// PUT /api/:backend/events/:id
    async fn update_event(&self, id: i64, fields: &EventDraft) -> ApiResult<()> {
        let resp = self
            .http
            .put(self.url(&format!("events/{id}")))
            .json(fields)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(resp).await?;
        Ok(())
    }

    /// DELETE /api/:backend/events/:id
    async fn delete_event(&self, id: i64) -> ApiResult<()> {
        let resp = self
            .http
            .delete(self.url(&format!("events/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(resp).await?;
        Ok(())
    }

    /// GET /api/:backend/events/:id
    async fn get_event(&self, id: i64) -> ApiResult<Event> {
        let resp = self
            .http
            .get(self.url(&format!("events/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        let resp = Self::check(resp).await?;
        let envelope: EventEnvelope = resp.json().await.map_err(Self::transport)?;
        Ok(envelope.event)
    }

    /// GET /test
    async fn health_check(&self) -> ApiResult<()> {
        let resp = self
            .http
            .get(format!("{}/test", self.api_url))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(resp).await?;
        Ok(())
    }
}
