//! Seams between the analysis pipeline and the I/O around it.
//!
//! Implementations are created once at startup and shared across requests,
//! so every trait requires `Send + Sync`.

use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::types::{ContractAnalysis, Entity};

/// Language code returned when detection fails
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Turns an uploaded file into plain text.
pub trait TextExtractor: Send + Sync {
    /// Returns an empty string for unsupported or unreadable input.
    fn extract_text(&self, path: &Path) -> String;
}

pub trait LanguageDetector: Send + Sync {
    /// Returns a language code, or [`UNKNOWN_LANGUAGE`].
    fn detect(&self, text: &str) -> String;
}

/// Named-entity recognition. Label vocabulary is owned by the implementation.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

pub trait ReportRenderer: Send + Sync {
    /// Writes a report for `analysis` and returns the path of the file.
    fn render(&self, analysis: &ContractAnalysis) -> Result<PathBuf, ReportError>;
}
