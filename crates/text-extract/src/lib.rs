//! Contract text extraction
//!
//! Turns an uploaded `.pdf`, `.docx` or `.txt` file into plain text.
//!
//! [`extract_document`] reports failures as typed [`ExtractError`]s.
//! [`FileTextExtractor`] is the pipeline-facing wrapper: it logs the failure
//! and returns an empty string, which the pipeline treats as "no text".

pub mod docx;
pub mod error;
pub mod pdf;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use contract_types::TextExtractor;
use tracing::{debug, warn};

pub use error::ExtractError;

/// Supported upload formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Match the extension case-insensitively; `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }
}

/// Extract plain text from a file on disk.
pub fn extract_document(path: &Path) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| ExtractError::UnsupportedFormat(path.display().to_string()))?;

    debug!("Extracting {:?} text from {}", format, path.display());

    match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(&fs::read(path)?),
        DocumentFormat::Docx => docx::extract_docx_text(BufReader::new(File::open(path)?)),
        DocumentFormat::Txt => Ok(fs::read_to_string(path)?),
    }
}

/// File-based extractor that degrades every failure to an empty string
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextExtractor;

impl FileTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for FileTextExtractor {
    fn extract_text(&self, path: &Path) -> String {
        match extract_document(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Text extraction failed for {}: {}", path.display(), e);
                String::new()
            }
        }
    }
}
