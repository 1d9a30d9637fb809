//! Upload and report file locations

use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

use crate::error::ServerError;

/// Write an upload under a random name that keeps the original extension,
/// since extraction picks the format from it.
pub async fn save_upload(
    upload_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, ServerError> {
    let file_name = match upload_extension(original_name) {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    };
    let path = upload_dir.join(file_name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

/// Remove a saved upload once analysis is done. Failure is only logged.
pub async fn discard_upload(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove upload {}: {}", path.display(), e);
    }
}

/// Extension of an uploaded file name, if it is plain alphanumeric
fn upload_extension(original_name: &str) -> Option<String> {
    let ext = Path::new(original_name).extension()?.to_str()?;
    if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext.to_string())
    } else {
        None
    }
}

/// Resolve a requested report name inside the report directory.
///
/// Only bare file names are accepted.
pub fn report_path(report_dir: &Path, filename: &str) -> Result<PathBuf, ServerError> {
    if filename.is_empty()
        || filename.contains(&['/', '\\'][..])
        || filename.contains("..")
    {
        return Err(ServerError::InvalidRequest(format!(
            "Invalid report name '{}'",
            filename
        )));
    }
    Ok(report_dir.join(filename))
}
