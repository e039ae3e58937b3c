//! HTTP client for the remote notes service.
//!
//! Three operations are exposed through the [`NotesApi`] trait so the view
//! layer can run against the real service or an in-memory stand-in.

use std::future::Future;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{total_pages_for, NewNote, Note, NoteId, NoteListPage};

const ERROR_TEXT_MAX_CHARS: usize = 180;


/// Remote operations on notes.
pub trait NotesApi: Send + Sync + 'static {
    /// Fetch one page of notes matching `search` (empty means no filter).
    fn list_notes(
        &self,
        page: u32,
        per_page: u32,
        search: &str,
    ) -> impl Future<Output = Result<NoteListPage>> + Send;

    fn create_note(&self, note: &NewNote) -> impl Future<Output = Result<Note>> + Send;

    /// Delete a note, returning the removed note.
    fn delete_note(&self, id: &NoteId) -> impl Future<Output = Result<Note>> + Send;
}

/// `reqwest`-backed client with the bearer credential fixed at construction.
#[derive(Debug, Clone)]
pub struct NotesClient {
    config: ClientConfig,
    client: Client,
}

impl NotesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().build().map_err(|error| {
            Error::InvalidConfiguration(format!("failed to construct HTTP client: {error}"))
        })?;
        Ok(Self { config, client })
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.config.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

impl NotesApi for NotesClient {
    async fn list_notes(&self, page: u32, per_page: u32, search: &str) -> Result<NoteListPage> {
        let mut query = vec![
            ("page", page.to_string()),
            ("perPage", per_page.to_string()),
        ];
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }

        tracing::debug!(page, per_page, search, "GET /notes");
        let response = self
            .authorized(self.client.get(self.notes_url()).query(&query))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let body = response.text().await?;
        parse_list_page(&body, &self.config.list_field)
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        tracing::debug!(title = %note.title, tag = %note.tag, "POST /notes");
        let response = self
            .authorized(self.client.post(self.notes_url()).json(note))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Validation(parse_api_error(status, &body)));
        }
        if !status.is_success() {
            return Err(server_error(response).await);
        }
        Ok(response.json::<Note>().await?)
    }

    async fn delete_note(&self, id: &NoteId) -> Result<Note> {
        let url = format!(
            "{}/{}",
            self.notes_url(),
            urlencoding::encode(id.as_str())
        );
        tracing::debug!(%id, "DELETE /notes/{{id}}");
        let response = self.authorized(self.client.delete(url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }
        Ok(response.json::<Note>().await?)
    }
}

/// Parse a list response, reading notes from `list_field`.
///
/// `totalPages` is derived from `totalResults` when the service omits it.
pub fn parse_list_page(body: &str, list_field: &str) -> Result<NoteListPage> {
    let mut payload: serde_json::Map<String, Value> = serde_json::from_str(body)?;

    let notes = payload.remove(list_field).ok_or_else(|| {
        Error::InvalidPayload(format!("list response has no '{list_field}' field"))
    })?;
    let notes: Vec<Note> = serde_json::from_value(notes)?;

    let total_results = read_count(&payload, "totalResults")?
        .unwrap_or_else(|| u32::try_from(notes.len()).unwrap_or(u32::MAX));
    let total_pages = read_count(&payload, "totalPages")?
        .unwrap_or_else(|| total_pages_for(total_results, crate::models::PER_PAGE))
        .max(1);

    Ok(NoteListPage {
        notes,
        total_pages,
        total_results,
    })
}

fn read_count(payload: &serde_json::Map<String, Value>, field: &str) -> Result<Option<u32>> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|count| u32::try_from(count).ok())
            .map(Some)
            .ok_or_else(|| Error::InvalidPayload(format!("'{field}' must be a non-negative integer"))),
    }
}

async fn server_error(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Error::Server {
        status: status.as_u16(),
        message: parse_api_error(status, &body),
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return compact_text(&message);
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", status.as_u16()), ToString::to_string)
    } else {
        trimmed
    }
}

/// Error text is capped so a proxy's HTML error page stays readable in logs.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(ERROR_TEXT_MAX_CHARS).collect()
}
