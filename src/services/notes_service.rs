use chrono::Utc;
use std::sync::Arc;

use crate::errors::internal::NotesFlowError;
use crate::stores::{NoteStore, SortField, SortOrder};
use crate::types::dto::notes::{CreateNoteRequest, NoteDto, UpdateNoteRequest};

/// Note-management service
///
/// Every operation takes the authenticated owner id explicitly; a note
/// owned by someone else is indistinguishable from a nonexistent one.
pub struct NotesService {
    note_store: Arc<NoteStore>,
}

impl NotesService {
    /// Create a new NotesService
    pub fn new(note_store: Arc<NoteStore>) -> Self {
        Self { note_store }
    }

    /// List the owner's notes, newest-updated first unless overridden
    pub async fn list(
        &self,
        owner_id: i32,
        search_term: Option<&str>,
        sort_field: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Vec<NoteDto>, NotesFlowError> {
        let notes = self
            .note_store
            .list_by_owner(
                owner_id,
                search_term,
                SortField::parse(sort_field),
                SortOrder::parse(sort_order),
            )
            .await?;

        Ok(notes.into_iter().map(NoteDto::from).collect())
    }

    /// Fetch a single note owned by the caller
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<NoteDto, NotesFlowError> {
        self.note_store
            .find_by_id(id, owner_id)
            .await?
            .map(NoteDto::from)
            .ok_or(NotesFlowError::NotFound(id))
    }

    /// Create a note for the owner and return it with its assigned id
    pub async fn create(
        &self,
        request: &CreateNoteRequest,
        owner_id: i32,
    ) -> Result<NoteDto, NotesFlowError> {
        let now = Utc::now().timestamp_millis();

        let created = self
            .note_store
            .insert(owner_id, request.title.clone(), request.content.clone(), now)
            .await?;

        Ok(NoteDto::from(created))
    }

    /// Overwrite a note's title and content
    ///
    /// The creation timestamp is preserved and the modification timestamp
    /// advances. Returns whether a row changed.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateNoteRequest,
        owner_id: i32,
    ) -> Result<bool, NotesFlowError> {
        if self.note_store.find_by_id(id, owner_id).await?.is_none() {
            return Err(NotesFlowError::NotFound(id));
        }

        let now = Utc::now().timestamp_millis();

        Ok(self
            .note_store
            .update(
                id,
                owner_id,
                request.title.clone(),
                request.content.clone(),
                now,
            )
            .await?)
    }

    /// Delete a note owned by the caller; returns whether a row was removed
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, NotesFlowError> {
        Ok(self.note_store.delete(id, owner_id).await?)
    }
}
