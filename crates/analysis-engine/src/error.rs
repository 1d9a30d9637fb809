use contract_types::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Could not extract text")]
    NoText,

    #[error("Report rendering failed: {0}")]
    Report(#[from] ReportError),

    #[error("Report path has no file name: {0}")]
    InvalidReportPath(String),
}
