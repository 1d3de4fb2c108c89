use chrono::{DateTime, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::note;

/// Transfer object for a note
///
/// The owning user id is intentionally absent; notes are only ever served
/// through owner-scoped queries.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct NoteDto {
    /// Note id assigned by the store
    pub id: i32,

    /// Note title
    pub title: String,

    /// Note body, may be absent
    pub content: Option<String>,

    /// Creation timestamp (ISO 8601 format)
    #[oai(rename = "createdAt")]
    pub created_at: String,

    /// Last-modification timestamp (ISO 8601 format)
    #[oai(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<note::Model> for NoteDto {
    fn from(model: note::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: rfc3339(model.created_at),
            updated_at: rfc3339(model.updated_at),
        }
    }
}

fn rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|timestamp| timestamp.to_rfc3339())
        .unwrap_or_default()
}

/// Request model for note creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    /// Note title
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: String,

    /// Note body
    pub content: Option<String>,
}

/// Request model for note update
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    /// Note id, must match the id in the URL
    pub id: i32,

    /// Replacement title
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: String,

    /// Replacement body
    pub content: Option<String>,
}

/// API response for note creation
#[derive(ApiResponse, Debug)]
pub enum NoteCreatedResponse {
    /// Note created, location of the new resource in the Location header
    #[oai(status = 201)]
    Created(Json<NoteDto>, #[oai(header = "Location")] String),
}

/// API response for note update
#[derive(ApiResponse, Debug)]
pub enum NoteUpdatedResponse {
    /// Note updated
    #[oai(status = 204)]
    Updated,
}

/// API response for note deletion
#[derive(ApiResponse, Debug)]
pub enum NoteDeletedResponse {
    /// Note deleted
    #[oai(status = 204)]
    Deleted,
}
