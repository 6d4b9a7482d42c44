//! HTTP client for the task API.

use daybook_core::model::{EventType, Task};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side error taxonomy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local validation failed; no network call was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// The server answered with an error envelope.
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never completed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The interesting part of the server's error envelope; unknown fields are
/// ignored.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Body of `POST /api/tasks`. Date and time stay strings, exactly as the
/// form submits them; the server validates and parses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskPayload {
    pub text: String,
    pub formatted_text: String,
    pub date: String,
    pub time: String,
    pub event_type: EventType,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: i64,
}

#[derive(Debug, Serialize)]
struct UpdateBody {
    completed: bool,
}

/// Thin reqwest wrapper over the task API routes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the service at `base_url` (scheme + authority,
    /// with or without a trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turns a non-2xx response into `ClientError::Api`, decoding the JSON
    /// error envelope when the server sent one.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let message = match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => envelope.message,
            Err(_) => "unrecognized error response".to_owned(),
        };
        Err(ClientError::Api { status, message })
    }

    /// Fetches the full task list.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for an error response, `ClientError::Http`
    /// if the request never completed.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.http.get(self.url("/api/tasks")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Creates a task and returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for an error response, `ClientError::Http`
    /// if the request never completed.
    pub async fn create_task(&self, payload: &NewTaskPayload) -> Result<i64, ClientError> {
        let response = self
            .http
            .post(self.url("/api/tasks"))
            .json(payload)
            .send()
            .await?;
        let created: CreatedResponse = Self::check(response).await?.json().await?;
        Ok(created.id)
    }

    /// Sets a task's completed flag.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for an error response (404 for an unknown
    /// id), `ClientError::Http` if the request never completed.
    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/tasks/{id}")))
            .json(&UpdateBody { completed })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for an error response (404 for an unknown
    /// id), `ClientError::Http` if the request never completed.
    pub async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
