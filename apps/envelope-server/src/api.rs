//! REST endpoints. Every response, including extractor failures, is an envelope.

use std::sync::Arc;

use api_envelope::{
    ApiResponse, EnvelopeResult, ErrDef, PageRequest, PaginationConfig, ValidationResponse,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use validator::Validate;

use crate::notes::{Note, NoteStore};

pub const NOTE_NOT_FOUND: ErrDef = ErrDef::new(404, "NOTE_NOT_FOUND", "Note not found");

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub pagination: Arc<PaginationConfig>,
}

impl AppState {
    /// Fails when `pagination` has a zero default or maximum size.
    pub fn new(store: NoteStore, pagination: PaginationConfig) -> EnvelopeResult<Self> {
        pagination.validate()?;
        Ok(Self {
            store: Arc::new(store),
            pagination: Arc::new(pagination),
        })
    }
}

/// REST DTO for note representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            body: note.body,
            created_at: note.created_at,
        }
    }
}

/// REST DTO for creating a note
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNoteReq {
    #[validate(length(min = 1, max = 100, message = "제목은 1자 이상 100자 이하여야 합니다"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub body: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> ApiResponse<&'static str> {
    ApiResponse::ok("ok")
}

async fn list_notes(
    State(state): State<AppState>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Response {
    let Query(request) = match query {
        Ok(q) => q,
        Err(rejection) => return ApiResponse::<()>::bad_request(rejection.body_text()).into_response(),
    };
    let pageable = match request.resolve(&state.pagination) {
        Ok(p) => p,
        Err(e) => {
            return ApiResponse::field_error_with_value("size", e.to_string(), request.size)
                .into_response()
        }
    };

    let (notes, total) = state.store.slice(pageable.offset(), pageable.size());
    tracing::debug!(
        page = pageable.page(),
        size = pageable.size(),
        total,
        "listing notes"
    );
    match pageable.into_page(notes, total) {
        Ok(page) => ApiResponse::ok(page.map_items(NoteDto::from)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn get_note(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<Uuid>() else {
        return ApiResponse::field_error_with_value("id", "must be a UUID", raw_id).into_response();
    };
    match state.store.get(id) {
        Some(note) => ApiResponse::ok(NoteDto::from(note)).into_response(),
        None => NOTE_NOT_FOUND
            .to_response_with::<NoteDto>(format!("Note {id} was not found"))
            .into_response(),
    }
}

async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteReq>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => return ApiResponse::<()>::bad_request(rejection.body_text()).into_response(),
    };
    if let Err(errors) = request.validate() {
        tracing::debug!(?errors, "rejecting invalid note");
        return ValidationResponse::from(errors).into_response();
    }

    let note = state.store.insert(request.title, request.body);
    tracing::info!(id = %note.id, "note created");
    ApiResponse::created_with_message(NoteDto::from(note), "Note created").into_response()
}
