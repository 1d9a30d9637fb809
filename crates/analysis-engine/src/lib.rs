//! Contract analysis engine
//!
//! Keyword heuristics over contract text: clause segmentation, intent
//! classification, risk scoring and compliance advisories, plus the
//! pipeline that ties them to extraction, entity recognition and report
//! rendering.

pub mod clauses;
pub mod compliance;
pub mod entities;
pub mod error;
pub mod intent;
pub mod language;
pub mod patterns;
pub mod pipeline;
pub mod risk;
pub mod summary;

pub use clauses::{split_clauses, ClauseCandidate};
pub use compliance::check_compliance;
pub use entities::PatternEntityRecognizer;
pub use error::AnalysisError;
pub use intent::classify_intent;
pub use language::WhatlangDetector;
pub use pipeline::{ContractAnalyzer, DOWNLOAD_PREFIX};
pub use risk::{assess_risk, document_risk, RiskAssessment};
pub use summary::generate_summary;
