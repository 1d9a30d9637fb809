//! PDF report rendering for contract analyses
//!
//! [`render_report_pdf`] turns a [`ContractAnalysis`] into PDF bytes;
//! [`PdfReportRenderer`] writes those bytes to a report directory under a
//! random name and hands the path back to the pipeline.

pub mod layout;
pub mod render;
pub mod report;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use contract_types::{ContractAnalysis, ReportError, ReportRenderer};
use tracing::debug;
use uuid::Uuid;

pub use layout::{layout_pages, Block, FontWeight, PlacedLine};
pub use report::{report_blocks, REPORT_TITLE};

/// Render an analysis report to PDF bytes.
pub fn render_report_pdf(
    analysis: &ContractAnalysis,
    generated_at: &str,
) -> Result<Vec<u8>, ReportError> {
    let blocks = report_blocks(analysis, generated_at);
    let pages = layout_pages(&blocks);
    render::build_pdf(&pages)
}

/// Writes reports as `<output_dir>/<uuid>.pdf`
#[derive(Debug, Clone)]
pub struct PdfReportRenderer {
    output_dir: PathBuf,
}

impl PdfReportRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, analysis: &ContractAnalysis) -> Result<PathBuf, ReportError> {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let bytes = render_report_pdf(analysis, &generated_at)?;

        let path = self.output_dir.join(format!("{}.pdf", Uuid::new_v4()));
        fs::write(&path, &bytes)?;

        debug!("Wrote {} byte report to {}", bytes.len(), path.display());
        Ok(path)
    }
}
