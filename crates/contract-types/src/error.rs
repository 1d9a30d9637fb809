use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to build report: {0}")]
    BuildError(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
