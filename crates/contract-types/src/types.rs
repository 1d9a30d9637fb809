use std::fmt;

/// Normative force of a clause, derived from its modal keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Intent {
    Obligation,
    Right,
    Prohibition,
    Neutral,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Obligation => "Obligation",
            Intent::Right => "Right",
            Intent::Prohibition => "Prohibition",
            Intent::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Map a 0-100 score to its level. Lower bounds are strict:
    /// 30 is LOW and 60 is MEDIUM.
    pub fn from_score(score: u32) -> Self {
        if score > 60 {
            RiskLevel::High
        } else if score > 30 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Clause {
    pub id: usize, // 1-based position before short fragments are dropped
    pub text: String,
    pub intent: Intent,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub keywords: Vec<String>, // In keyword-table order
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String, // e.g., "ORG", "DATE", "MONEY"
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Everything the pipeline knows about a document before a report is rendered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContractAnalysis {
    pub language: String,
    pub risk_score: u32, // Truncated average of clause scores
    pub risk_level: RiskLevel,
    pub entities: Vec<Entity>,
    pub compliance: Vec<String>,
    pub summary: String,
    pub clauses: Vec<Clause>,
}

/// Analysis plus the download link of its rendered report.
///
/// Serializes as a single flat object.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub analysis: ContractAnalysis,
    pub report_url: String,
}
