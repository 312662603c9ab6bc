//! Notes REST API — the CRUD surface over the file-backed store.
//!
//! This layer only extracts note names and payloads from requests and
//! translates [`NoteError`] into status codes; every storage decision
//! lives in the store.

use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use serde::Serialize;

use crate::config::static_dir;
use crate::notes::NoteError;
use crate::AppState;

/// Translate a store error into the wire response.
fn error_response(err: &NoteError) -> HttpResponse {
    match err {
        NoteError::NotFound(_) => HttpResponse::NotFound().body("Note not found"),
        NoteError::AlreadyExists(_) => HttpResponse::BadRequest().body("Note already exists"),
        NoteError::InvalidName(name) => {
            HttpResponse::BadRequest().body(format!("Invalid note name: {}", name))
        }
        NoteError::Io(e) => {
            log::error!("[NOTES] Storage failure: {}", e);
            HttpResponse::InternalServerError().body("Internal server error")
        }
    }
}

// --- Upload form ---

/// Serve the static HTML upload form
async fn upload_form() -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(static_dir().join("UploadForm.html")).await?)
}

// --- Create (multipart form) ---

/// Create a note from the upload form's multipart fields `note_name` and `note`
async fn write_note(data: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let mut note_name: Option<String> = None;
    let mut note: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(e) => {
                return HttpResponse::BadRequest().body(format!("Failed to read form data: {}", e));
            }
        };

        let field_name = field.name().to_string();

        let mut value: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => value.extend_from_slice(&bytes),
                Err(e) => {
                    return HttpResponse::BadRequest()
                        .body(format!("Failed to read form data: {}", e));
                }
            }
        }

        let value = match String::from_utf8(value) {
            Ok(v) => v,
            Err(_) => {
                return HttpResponse::BadRequest().body("Form fields must be UTF-8");
            }
        };

        match field_name.as_str() {
            "note_name" => note_name = Some(value),
            "note" => note = Some(value),
            _ => {}
        }
    }

    let (name, content) = match (note_name, note) {
        (Some(n), Some(c)) => (n, c),
        _ => {
            return HttpResponse::BadRequest().body("Missing note_name or note field");
        }
    };

    match data.store.create(&name, &content) {
        Ok(()) => HttpResponse::Created().body("Note created"),
        Err(e) => error_response(&e),
    }
}

// --- Read / update / delete ---

async fn read_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    match data.store.read(&name) {
        Ok(text) => HttpResponse::Ok().body(text),
        Err(e) => error_response(&e),
    }
}

async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: String,
) -> impl Responder {
    let name = path.into_inner();
    match data.store.update(&name, &body) {
        Ok(()) => HttpResponse::Ok().body("Note updated"),
        Err(e) => error_response(&e),
    }
}

async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    match data.store.delete(&name) {
        Ok(()) => HttpResponse::Ok().body("Note deleted"),
        Err(e) => error_response(&e),
    }
}

// --- List ---

async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.store.list() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => error_response(&e),
    }
}

// --- Info ---

#[derive(Debug, Serialize)]
struct NotesInfoResponse {
    success: bool,
    notes_path: String,
    exists: bool,
    note_count: usize,
}

async fn notes_info(data: web::Data<AppState>) -> impl Responder {
    let note_count = match data.store.count() {
        Ok(c) => c,
        Err(e) => return error_response(&e),
    };

    HttpResponse::Ok().json(NotesInfoResponse {
        success: true,
        notes_path: data.store.root().to_string_lossy().to_string(),
        exists: data.store.root().is_dir(),
        note_count,
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/UploadForm.html", web::get().to(upload_form))
        .route("/write", web::post().to(write_note))
        .service(web::resource("/api/notes/info").route(web::get().to(notes_info)))
        .service(
            web::scope("/notes")
                .route("", web::get().to(list_notes))
                .route("/{name}", web::get().to(read_note))
                .route("/{name}", web::put().to(update_note))
                .route("/{name}", web::delete().to(delete_note)),
        );
}
