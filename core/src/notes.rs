//! Typed access to the notes API on top of the text-returning helper.
//!
//! `ApiClient::request` never parses; this module does, turning response text
//! into `Note` values or into `ApiError::Detail` when the server answers with
//! its `{"detail": ...}` error document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::options::RequestOptions;
use crate::transport::Transport;

const NOTES_PATH: &str = "/notes/";

/// A stored note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Payload for creating or replacing a note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

/// Borrowed view of an `ApiClient` exposing the notes endpoints.
#[derive(Debug)]
pub struct NotesApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T> Clone for NotesApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NotesApi<'_, T> {}

impl<T> ApiClient<T> {
    pub fn notes(&self) -> NotesApi<'_, T> {
        NotesApi { client: self }
    }
}

impl<T: Transport> NotesApi<'_, T> {
    pub async fn list(&self) -> Result<Vec<Note>, ApiError> {
        let text = self.client.get(NOTES_PATH).await?;
        parse_response(&text)
    }

    pub async fn get(&self, id: i64) -> Result<Note, ApiError> {
        let text = self.client.get(&note_path(id)).await?;
        parse_response(&text)
    }

    pub async fn create(&self, input: &NoteInput) -> Result<Note, ApiError> {
        let options = RequestOptions::new().json(input)?;
        let text = self
            .client
            .request(NOTES_PATH, HttpMethod::Post, options)
            .await?;
        parse_response(&text)
    }

    pub async fn update(&self, id: i64, input: &NoteInput) -> Result<Note, ApiError> {
        let options = RequestOptions::new().json(input)?;
        let text = self
            .client
            .request(&note_path(id), HttpMethod::Put, options)
            .await?;
        parse_response(&text)
    }

    /// Delete a note, returning it as it was before deletion.
    pub async fn delete(&self, id: i64) -> Result<Note, ApiError> {
        let text = self
            .client
            .request(&note_path(id), HttpMethod::Delete, RequestOptions::default())
            .await?;
        parse_response(&text)
    }
}

fn note_path(id: i64) -> String {
    format!("{NOTES_PATH}{id}")
}

#[derive(Deserialize)]
struct ErrorDocument {
    detail: Value,
}

/// Parse `text` as `R`, falling back to the server's error document.
fn parse_response<R: DeserializeOwned>(text: &str) -> Result<R, ApiError> {
    let err = match serde_json::from_str(text) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    match serde_json::from_str::<ErrorDocument>(text) {
        Ok(ErrorDocument {
            detail: Value::String(message),
        }) => Err(ApiError::Detail(message)),
        Ok(ErrorDocument { detail }) => Err(ApiError::Detail(detail.to_string())),
        Err(_) => Err(ApiError::Deserialization(err)),
    }
}
