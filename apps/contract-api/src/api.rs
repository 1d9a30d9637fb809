//! API handlers for the contract analyzer server
//!
//! Provides REST endpoints for:
//! - Contract analysis
//! - Report download
//! - Health check

use analysis_engine::AnalysisError;
use axum::{
    body::Body,
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contract_types::AnalysisResult;
use serde::Serialize;
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::storage::{discard_upload, report_path, save_upload};
use crate::AppState;

/// Multipart field carrying the contract
const UPLOAD_FIELD: &str = "file";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "contract-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Analysis response: the full result, or `{"error": ...}` when no text
/// could be extracted
#[derive(Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Completed(AnalysisResult),
    Failed { error: String },
}

/// Handler: POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read upload", e))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload.ok_or_else(|| {
        ServerError::InvalidRequest(format!("Missing multipart field '{}'", UPLOAD_FIELD))
    })?;

    info!("Analyze request: file={}, size={} bytes", file_name, bytes.len());

    let path = save_upload(&state.upload_dir, &file_name, &bytes).await?;
    debug!("Saved upload to {}", path.display());

    let analyzer = state.analyzer.clone();
    let task_path = path.clone();
    let joined = tokio::task::spawn_blocking(move || analyzer.analyze_file(&task_path)).await;

    // Only the rendered report outlives the request
    discard_upload(&path).await;

    let outcome =
        joined.map_err(|e| ServerError::Internal(format!("Analysis task failed: {}", e)))?;

    match outcome {
        Ok(result) => Ok(Json(AnalyzeResponse::Completed(result))),
        Err(AnalysisError::NoText) => Ok(Json(AnalyzeResponse::Failed {
            error: AnalysisError::NoText.to_string(),
        })),
        Err(other) => Err(ServerError::Internal(other.to_string())),
    }
}

/// Body-limit rejections keep their 413; everything else is a bad request.
fn multipart_error(context: &str, err: MultipartError) -> ServerError {
    let message = format!("{}: {}", context, err);
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(message)
    } else {
        ServerError::InvalidRequest(message)
    }
}

/// Handler: GET /download/:filename
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ServerError> {
    let path = report_path(&state.report_dir, &filename)?;

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ServerError::ReportNotFound(filename));
        }
        Err(e) => return Err(e.into()),
    };

    info!("Download request: {}", filename);

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, Body::from_stream(ReaderStream::new(file))).into_response())
}
