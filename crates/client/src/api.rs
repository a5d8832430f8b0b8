//! HTTP client for the notes API.
//!
//! [`NotesBackend`] is the seam the UI model talks to; [`NotesApi`] is the
//! [`reqwest`] implementation against a running server.

use std::time::Duration;

use async_trait::async_trait;
use notekeeper_core::notes::{CreateNote, Note, NotePatch};
use notekeeper_core::types::DbId;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Operations the UI needs from the server.
#[async_trait]
pub trait NotesBackend: Send + Sync {
    /// List notes whose archived flag equals `archived`.
    async fn list(&self, archived: bool) -> Result<Vec<Note>, ClientError>;

    async fn get(&self, id: DbId) -> Result<Note, ClientError>;

    async fn create(&self, input: &CreateNote) -> Result<Note, ClientError>;

    /// Apply a partial update and return the stored note.
    async fn update(&self, id: DbId, patch: &NotePatch) -> Result<Note, ClientError>;

    async fn delete(&self, id: DbId) -> Result<(), ClientError>;
}

/// HTTP client for a notes server.
pub struct NotesApi {
    client: reqwest::Client,
    base_url: String,
}

impl NotesApi {
    /// Create a client with the configured base URL and request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// * `base_url` - API root including the route prefix, e.g.
    ///   `http://localhost:3000/api/v1`.
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: DbId) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`ClientError::Status`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl NotesBackend for NotesApi {
    async fn list(&self, archived: bool) -> Result<Vec<Note>, ClientError> {
        let response = self
            .client
            .get(self.notes_url())
            .query(&[("archived", archived)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn get(&self, id: DbId) -> Result<Note, ClientError> {
        let response = self.client.get(self.note_url(id)).send().await?;
        Self::parse_response(response).await
    }

    async fn create(&self, input: &CreateNote) -> Result<Note, ClientError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn update(&self, id: DbId, patch: &NotePatch) -> Result<Note, ClientError> {
        let response = self
            .client
            .patch(self.note_url(id))
            .json(patch)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.note_url(id)).send().await?;
        Self::check_status(response).await
    }
}
