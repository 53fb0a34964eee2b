//! Document upload and retrieval handlers

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for document upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Confirmation message naming the stored document
    pub message: String,
}

/// POST /documents
/// Upload a document from a multipart `file` field
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!(error = %e, "multipart decode failed");
        ApiError::BadRequest("Invalid multipart request".to_string())
    })? {
        if field.name() != Some("file") {
            continue;
        }

        // A `file` field without a filename is a plain form value, not a
        // file part.
        let Some(name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        if name.is_empty() {
            return Err(ApiError::BadRequest(
                "No file selected for uploading".to_string(),
            ));
        }

        let content = field.bytes().await.map_err(|e| {
            tracing::debug!(error = %e, "multipart read failed");
            ApiError::BadRequest("Invalid multipart request".to_string())
        })?;
        let size = content.len();

        state.store().put(&name, content).await?;

        tracing::info!(name = %name, size, "document uploaded");

        return Ok(Json(UploadResponse {
            message: format!("Document '{}' uploaded successfully", name),
        }));
    }

    Err(ApiError::BadRequest(
        "No file part in the request".to_string(),
    ))
}

/// GET /documents/{name}
/// Serve a stored document as raw bytes
pub async fn get_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let content = state.store().get(&name).await?;

    // Content type is inferred from the name's extension, as the filesystem
    // serving path of the reference behavior did.
    let mime = mime_guess::from_path(&name).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.as_ref())], content).into_response())
}
