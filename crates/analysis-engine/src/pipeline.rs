//! End-to-end contract analysis
//!
//! [`ContractAnalyzer`] sequences the stages for one document:
//!
//! 1. Extract text (collaborator). Empty text stops the pipeline.
//! 2. Split into clauses, then classify and score each clause.
//! 3. Average clause scores into the document score.
//! 4. Detect language, collect entities, check compliance, summarize.
//! 5. Render the report (collaborator) and attach its download link.

use std::path::Path;
use std::sync::Arc;

use contract_types::{
    AnalysisResult, Clause, ContractAnalysis, EntityRecognizer, LanguageDetector, ReportRenderer,
    TextExtractor,
};
use tracing::{debug, info};

use crate::clauses::split_clauses;
use crate::compliance::check_compliance;
use crate::error::AnalysisError;
use crate::intent::classify_intent;
use crate::risk::{assess_risk, document_risk};
use crate::summary::generate_summary;

/// URL prefix under which rendered reports are served
pub const DOWNLOAD_PREFIX: &str = "/download/";

/// Analysis pipeline with its collaborators.
///
/// Built once at startup and shared across requests; every stage is
/// stateless, so concurrent calls need no coordination.
#[derive(Clone)]
pub struct ContractAnalyzer {
    extractor: Arc<dyn TextExtractor>,
    language: Arc<dyn LanguageDetector>,
    entities: Arc<dyn EntityRecognizer>,
    renderer: Arc<dyn ReportRenderer>,
}

impl ContractAnalyzer {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        language: Arc<dyn LanguageDetector>,
        entities: Arc<dyn EntityRecognizer>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            extractor,
            language,
            entities,
            renderer,
        }
    }

    /// Analyze an uploaded file and render its report.
    ///
    /// Returns [`AnalysisError::NoText`] without running any later stage when
    /// extraction yields no text.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult, AnalysisError> {
        let text = self.extractor.extract_text(path);
        if text.is_empty() {
            info!("No text extracted from {}", path.display());
            return Err(AnalysisError::NoText);
        }

        let analysis = self.analyze_text(&text);

        let report_path = self.renderer.render(&analysis)?;
        let report_name = report_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| AnalysisError::InvalidReportPath(report_path.display().to_string()))?;

        info!(
            "Analyzed {}: {} clauses, risk {} ({}), report {}",
            path.display(),
            analysis.clauses.len(),
            analysis.risk_score,
            analysis.risk_level,
            report_name
        );

        Ok(AnalysisResult {
            analysis,
            report_url: format!("{}{}", DOWNLOAD_PREFIX, report_name),
        })
    }

    /// Run every text stage over already-extracted text.
    pub fn analyze_text(&self, text: &str) -> ContractAnalysis {
        let language = self.language.detect(text);

        let clauses: Vec<Clause> = split_clauses(text)
            .into_iter()
            .map(|candidate| {
                let intent = classify_intent(&candidate.text);
                let risk = assess_risk(&candidate.text);
                debug!(
                    "Clause {}: intent={}, risk={} ({}), keywords={:?}",
                    candidate.id, intent, risk.score, risk.level, risk.keywords
                );
                Clause {
                    id: candidate.id,
                    text: candidate.text,
                    intent,
                    risk_score: risk.score,
                    risk_level: risk.level,
                    keywords: risk.keywords,
                }
            })
            .collect();

        let scores: Vec<u32> = clauses.iter().map(|c| c.risk_score).collect();
        let (risk_score, risk_level) = document_risk(&scores);

        ContractAnalysis {
            language,
            risk_score,
            risk_level,
            entities: self.entities.recognize(text),
            compliance: check_compliance(text),
            summary: generate_summary(text),
            clauses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use contract_types::{Entity, Intent, ReportError, RiskLevel};
    use pretty_assertions::assert_eq;

    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract_text(&self, _path: &Path) -> String {
            self.0.to_string()
        }
    }

    struct FixedLanguage;

    impl LanguageDetector for FixedLanguage {
        fn detect(&self, _text: &str) -> String {
            "eng".to_string()
        }
    }

    struct FixedEntities;

    impl EntityRecognizer for FixedEntities {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            vec![Entity::new("Acme Corp", "ORG")]
        }
    }

    #[derive(Default)]
    struct CountingRenderer {
        calls: AtomicUsize,
    }

    impl ReportRenderer for CountingRenderer {
        fn render(&self, _analysis: &ContractAnalysis) -> Result<PathBuf, ReportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PathBuf::from("reports/report-1.pdf"))
        }
    }

    struct FailingRenderer;

    impl ReportRenderer for FailingRenderer {
        fn render(&self, _analysis: &ContractAnalysis) -> Result<PathBuf, ReportError> {
            Err(ReportError::BuildError("no fonts".to_string()))
        }
    }

    fn analyzer(text: &'static str, renderer: Arc<dyn ReportRenderer>) -> ContractAnalyzer {
        ContractAnalyzer::new(
            Arc::new(FixedText(text)),
            Arc::new(FixedLanguage),
            Arc::new(FixedEntities),
            renderer,
        )
    }

    const TWO_CLAUSES: &str = "1. The vendor shall indemnify the client without notice.\n\
        2. Either party may terminate this agreement with thirty days written notice.";

    #[test]
    fn test_two_clause_contract() {
        let renderer = Arc::new(CountingRenderer::default());
        let result = analyzer(TWO_CLAUSES, renderer.clone())
            .analyze_file(Path::new("uploads/contract.txt"))
            .unwrap();
        let analysis = &result.analysis;

        assert_eq!(analysis.clauses.len(), 2);

        let first = &analysis.clauses[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.intent, Intent::Obligation);
        assert_eq!(first.risk_score, 60);
        assert_eq!(first.risk_level, RiskLevel::Medium);
        assert_eq!(first.keywords, vec!["without notice", "indemnify"]);

        let second = &analysis.clauses[1];
        assert_eq!(second.id, 2);
        assert_eq!(second.intent, Intent::Right);
        assert_eq!(second.risk_score, 0);

        // (60 + 0) / 2 = 30, which is not above the MEDIUM threshold
        assert_eq!(analysis.risk_score, 30);
        assert_eq!(analysis.risk_level, RiskLevel::Low);

        assert_eq!(analysis.language, "eng");
        assert_eq!(analysis.entities, vec![Entity::new("Acme Corp", "ORG")]);
        assert!(analysis.compliance.is_empty());
        assert_eq!(result.report_url, "/download/report-1.pdf");
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_short_second_clause_is_dropped() {
        // The second fragment is 47 characters, below the clause threshold
        let text = "1. The vendor shall indemnify the client without notice.\n\
                    2. Either party may terminate with 30 days notice.";
        let analysis = analyzer("", Arc::new(CountingRenderer::default())).analyze_text(text);

        assert_eq!(analysis.clauses.len(), 1);
        assert_eq!(analysis.risk_score, 60);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_empty_extraction_short_circuits() {
        let renderer = Arc::new(CountingRenderer::default());
        let err = analyzer("", renderer.clone())
            .analyze_file(Path::new("uploads/contract.xlsx"))
            .unwrap_err();

        assert!(matches!(err, AnalysisError::NoText));
        assert_eq!(err.to_string(), "Could not extract text");
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_text_without_clauses_scores_zero() {
        let analysis = analyzer("", Arc::new(CountingRenderer::default()))
            .analyze_text("Non compete. Unlimited liability. No termination.");

        assert!(analysis.clauses.is_empty());
        assert_eq!(analysis.risk_score, 0);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        // Compliance runs on the full text, not on clauses
        assert_eq!(analysis.compliance.len(), 3);
    }

    #[test]
    fn test_unnumbered_document_is_single_clause() {
        let text = "This services agreement grants the provider exclusive rights to the territory.";
        let analysis = analyzer("", Arc::new(CountingRenderer::default())).analyze_text(text);

        assert_eq!(analysis.clauses.len(), 1);
        assert_eq!(analysis.clauses[0].id, 1);
        assert_eq!(analysis.clauses[0].text, text);
        assert_eq!(analysis.clauses[0].risk_score, 30);
        assert_eq!(analysis.risk_score, 30);
    }

    #[test]
    fn test_render_failure_is_reported() {
        let err = analyzer(TWO_CLAUSES, Arc::new(FailingRenderer))
            .analyze_file(Path::new("uploads/contract.txt"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Report(_)));
    }
}
