pub mod collaborators;
pub mod error;
pub mod types;

pub use collaborators::{
    EntityRecognizer, LanguageDetector, ReportRenderer, TextExtractor, UNKNOWN_LANGUAGE,
};
pub use error::ReportError;
pub use types::{AnalysisResult, Clause, ContractAnalysis, Entity, Intent, RiskLevel};
