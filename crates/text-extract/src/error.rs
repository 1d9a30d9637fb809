use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF is password protected")]
    PasswordProtected,

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Invalid DOCX: {0}")]
    InvalidDocx(String),

    #[error("Text extraction failed: {0}")]
    ExtractionError(String),
}
