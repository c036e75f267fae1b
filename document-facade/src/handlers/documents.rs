use crate::models::{Document, GatewayFile};
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Multipart, Path, RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use service_core::error::AppError;

/// List documents by forwarding the caller's query string to the gateway.
///
/// A `files` array in the gateway response is projected into the Document
/// shape; any other JSON body is returned to the caller unchanged.
pub async fn list_documents(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let response = state.gateway.list(query.as_deref()).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch listing from gateway");
        AppError::Upstream("Failed to fetch documents")
    })?;

    let body: serde_json::Value = response.json().await.map_err(|e| {
        tracing::error!(error = %e, "Gateway listing response was not valid JSON");
        AppError::Upstream("Failed to fetch documents")
    })?;

    let Some(files) = body.get("files").filter(|files| files.is_array()) else {
        // Undocumented gateway shape: pass it through rather than guessing.
        return Ok(Json(body).into_response());
    };

    let files: Vec<GatewayFile> = serde_json::from_value(files.clone()).map_err(|e| {
        tracing::error!(error = %e, "Gateway listing entries had an unrecognizable shape");
        AppError::Upstream("Failed to fetch documents")
    })?;

    let documents: Vec<Document> = files.into_iter().map(Document::from).collect();

    tracing::info!(count = documents.len(), "Document listing completed");

    Ok(Json(documents).into_response())
}

/// Upload a document by forwarding the `file` part's raw bytes to the
/// gateway. The gateway's JSON body and status are passed through verbatim.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read multipart body");
        AppError::Upstream("Failed to upload file")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read file bytes");
            AppError::Upstream("Failed to upload file")
        })?;

        file = Some((content_type, data.to_vec()));
        break;
    }

    // The only input validation in the system: reject before any outbound call.
    let (content_type, data) =
        file.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No file provided")))?;

    let size = data.len();

    let response = state.gateway.upload(&content_type, data).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to forward upload to gateway");
        AppError::Upstream("Failed to upload file")
    })?;

    let status = response.status();

    let body: serde_json::Value = response.json().await.map_err(|e| {
        tracing::error!(error = %e, "Gateway upload response was not valid JSON");
        AppError::Upstream("Failed to upload file")
    })?;

    tracing::info!(
        size = size,
        content_type = %content_type,
        status = %status,
        "Upload forwarded to gateway"
    );

    Ok((status, Json(body)).into_response())
}

/// Fetch a stored document by identifier, passing the gateway's binary body
/// through with a long-lived cache directive. Stored content is addressed by
/// identifier, so it never changes once written.
pub async fn fetch_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let response = state.gateway.fetch(&id).await.map_err(|e| {
        tracing::error!(document_id = %id, error = %e, "Failed to fetch file from gateway");
        AppError::Upstream("Failed to fetch file")
    })?;

    if !response.status().is_success() {
        let status = response.status();
        tracing::warn!(
            document_id = %id,
            status = %status,
            "Gateway returned non-success for file fetch"
        );
        return Ok((status, Json(json!({ "error": "File not found" }))).into_response());
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = response.bytes().await.map_err(|e| {
        tracing::error!(document_id = %id, error = %e, "Failed to read file bytes from gateway");
        AppError::Upstream("Failed to fetch file")
    })?;

    tracing::info!(
        document_id = %id,
        content_type = %content_type,
        size = data.len(),
        "Document fetch completed"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                "public, max-age=31536000".to_string(),
            ),
        ],
        data,
    )
        .into_response())
}
