use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

/// In-memory note storage. Ids are handed out sequentially from 1 and never
/// reused.
#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    notes: BTreeMap<i64, Note>,
}

pub type Db = Arc<RwLock<Store>>;

/// Error responses, all in the `{"detail": ...}` shape clients expect.
#[derive(Debug)]
pub enum NoteError {
    NotFound,
    /// The `{id}` segment is not an integer.
    InvalidId(String),
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        match self {
            NoteError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Note not found" })),
            )
                .into_response(),
            NoteError::InvalidId(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": [{
                        "loc": ["path", "note_id"],
                        "msg": msg,
                        "type": "int_parsing",
                    }]
                })),
            )
                .into_response(),
        }
    }
}

fn note_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, NoteError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| NoteError::InvalidId(rejection.body_text()))
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/notes/", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note).put(update_note).delete(delete_note))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "notes server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_notes(State(db): State<Db>) -> Json<Vec<Note>> {
    let store = db.read().await;
    Json(store.notes.values().cloned().collect())
}

async fn create_note(State(db): State<Db>, Json(input): Json<NoteInput>) -> Json<Note> {
    let mut store = db.write().await;
    store.next_id += 1;
    let note = Note {
        id: store.next_id,
        title: input.title,
        content: input.content,
    };
    store.notes.insert(note.id, note.clone());
    info!(id = note.id, "note created");
    Json(note)
}

async fn get_note(
    State(db): State<Db>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Note>, NoteError> {
    let id = note_id(path)?;
    let store = db.read().await;
    store.notes.get(&id).cloned().map(Json).ok_or(NoteError::NotFound)
}

async fn update_note(
    State(db): State<Db>,
    path: Result<Path<i64>, PathRejection>,
    Json(input): Json<NoteInput>,
) -> Result<Json<Note>, NoteError> {
    let id = note_id(path)?;
    let mut store = db.write().await;
    let note = store.notes.get_mut(&id).ok_or(NoteError::NotFound)?;
    note.title = input.title;
    note.content = input.content;
    debug!(id, "note updated");
    Ok(Json(note.clone()))
}

async fn delete_note(
    State(db): State<Db>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Note>, NoteError> {
    let id = note_id(path)?;
    let mut store = db.write().await;
    let note = store.notes.remove(&id).ok_or(NoteError::NotFound)?;
    info!(id, "note deleted");
    Ok(Json(note))
}
