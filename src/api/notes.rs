use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::api::NotesError;
use crate::services::{NotesService, TokenService};
use crate::types::dto::notes::{
    CreateNoteRequest, NoteCreatedResponse, NoteDeletedResponse, NoteDto, NoteUpdatedResponse,
    UpdateNoteRequest,
};

/// Note-management API endpoints
///
/// Every operation is scoped to the user identified by the bearer token's
/// subject claim; no other source of the owner id exists.
pub struct NotesApi {
    notes_service: Arc<NotesService>,
    token_service: Arc<TokenService>,
}

impl NotesApi {
    /// Create a new NotesApi backed by the given services
    pub fn new(notes_service: Arc<NotesService>, token_service: Arc<TokenService>) -> Self {
        Self {
            notes_service,
            token_service,
        }
    }

    /// Validate the bearer token and extract the authenticated user id
    fn authenticate(&self, auth: &BearerAuth) -> Result<i32, NotesError> {
        let claims = self.token_service.validate(&auth.0.token)?;

        claims
            .sub
            .parse::<i32>()
            .map_err(|_| NotesError::unauthorized())
    }
}

/// API tags for note endpoints
#[derive(Tags)]
enum NotesTags {
    /// Note management endpoints
    Notes,
}

#[OpenApi]
impl NotesApi {
    /// List the authenticated user's notes
    ///
    /// Supports substring search over title and content plus sorting by
    /// title, creation, or modification time; defaults to newest-updated
    /// first.
    #[oai(path = "/notes", method = "get", tag = "NotesTags::Notes")]
    pub async fn list_notes(
        &self,
        auth: BearerAuth,
        #[oai(name = "searchTerm")] search_term: Query<Option<String>>,
        #[oai(name = "sortField")] sort_field: Query<Option<String>>,
        #[oai(name = "sortOrder")] sort_order: Query<Option<String>>,
    ) -> Result<Json<Vec<NoteDto>>, NotesError> {
        let user_id = self.authenticate(&auth)?;

        let notes = self
            .notes_service
            .list(
                user_id,
                search_term.0.as_deref(),
                sort_field.0.as_deref(),
                sort_order.0.as_deref(),
            )
            .await?;

        Ok(Json(notes))
    }

    /// Fetch a single note by id
    #[oai(path = "/notes/:id", method = "get", tag = "NotesTags::Notes")]
    pub async fn get_note(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<NoteDto>, NotesError> {
        let user_id = self.authenticate(&auth)?;

        let note = self.notes_service.get_by_id(id.0, user_id).await?;

        Ok(Json(note))
    }

    /// Create a new note
    #[oai(path = "/notes", method = "post", tag = "NotesTags::Notes")]
    pub async fn create_note(
        &self,
        auth: BearerAuth,
        body: Json<CreateNoteRequest>,
    ) -> Result<NoteCreatedResponse, NotesError> {
        let user_id = self.authenticate(&auth)?;

        let note = self.notes_service.create(&body.0, user_id).await?;
        let location = format!("/api/notes/{}", note.id);

        Ok(NoteCreatedResponse::Created(Json(note), location))
    }

    /// Update a note's title and content
    #[oai(path = "/notes/:id", method = "put", tag = "NotesTags::Notes")]
    pub async fn update_note(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateNoteRequest>,
    ) -> Result<NoteUpdatedResponse, NotesError> {
        let user_id = self.authenticate(&auth)?;

        if id.0 != body.id {
            return Err(NotesError::validation_failed(
                "Note id in the URL does not match the id in the request body",
            ));
        }

        let updated = self.notes_service.update(id.0, &body.0, user_id).await?;
        if !updated {
            return Err(NotesError::not_found(id.0));
        }

        Ok(NoteUpdatedResponse::Updated)
    }

    /// Delete a note
    #[oai(path = "/notes/:id", method = "delete", tag = "NotesTags::Notes")]
    pub async fn delete_note(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<NoteDeletedResponse, NotesError> {
        let user_id = self.authenticate(&auth)?;

        let deleted = self.notes_service.delete(id.0, user_id).await?;
        if !deleted {
            return Err(NotesError::not_found(id.0));
        }

        Ok(NoteDeletedResponse::Deleted)
    }
}
