//! HTTP implementation of the note backend.
//!
//! Talks JSON to the Loam API service. Persistence, search semantics, and
//! ID assignment are all owned by the service; this client only moves
//! requests and responses.

use loam_core::{Error, Note, NoteBackend, NoteId, Result};
use serde::Serialize;

/// Default API address when `LOAM_API_URL` is unset.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8765";

/// HTTP client for the Loam note API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct NotePayload<'a> {
    title: &'a str,
    content: &'a str,
    tags: &'a [String],
}

impl HttpBackend {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Backend(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { base_url, client })
    }

    /// Builds a client from `LOAM_API_URL`, falling back to localhost.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("LOAM_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_notes(&self, response: reqwest::Response) -> Result<Vec<Note>> {
        checked(response)
            .await?
            .json::<Vec<Note>>()
            .await
            .map_err(|error| Error::Backend(format!("Failed to parse note list: {error}")))
    }
}

impl NoteBackend for HttpBackend {
    async fn fetch_all(&self) -> Result<Vec<Note>> {
        let response = self
            .client
            .get(format!("{}/notes", self.base_url))
            .send()
            .await
            .map_err(|error| Error::Backend(format!("Fetch request failed: {error}")))?;
        self.read_notes(response).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Note>> {
        let response = self
            .client
            .get(format!("{}/notes/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|error| Error::Backend(format!("Search request failed: {error}")))?;
        self.read_notes(response).await
    }

    async fn create(&self, title: &str, content: &str, tags: &[String]) -> Result<Note> {
        let response = self
            .client
            .post(format!("{}/notes", self.base_url))
            .json(&NotePayload {
                title,
                content,
                tags,
            })
            .send()
            .await
            .map_err(|error| Error::Backend(format!("Create request failed: {error}")))?;
        checked(response)
            .await?
            .json::<Note>()
            .await
            .map_err(|error| Error::Backend(format!("Failed to parse created note: {error}")))
    }

    async fn update(&self, id: &NoteId, title: &str, content: &str, tags: &[String]) -> Result<()> {
        let response = self
            .client
            .put(format!("{}/notes/{id}", self.base_url))
            .json(&NotePayload {
                title,
                content,
                tags,
            })
            .send()
            .await
            .map_err(|error| Error::Backend(format!("Update request failed: {error}")))?;
        checked(response).await.map(|_| ())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/notes/{id}", self.base_url))
            .send()
            .await
            .map_err(|error| Error::Backend(format!("Delete request failed: {error}")))?;
        checked(response).await.map(|_| ())
    }
}

/// Reject non-success responses with their status and a compacted body.
async fn checked(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Backend(format!(
        "Backend responded with HTTP {status}: {}",
        compact_text(&body)
    )))
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Backend("API base URL must not be empty".to_string()));
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(Error::Backend(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

/// Collapse an error body onto one bounded line for log and notice text.
fn compact_text(text: &str) -> String {
    const MAX_LEN: usize = 200;
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX_LEN {
        let truncated: String = collapsed.chars().take(MAX_LEN).collect();
        format!("{truncated}…")
    } else {
        collapsed
    }
}
