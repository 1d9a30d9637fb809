//! Keyword-weighted risk scoring

use contract_types::RiskLevel;
use serde::{Deserialize, Serialize};

use crate::patterns::{MAX_RISK_SCORE, RISK_KEYWORDS};

/// Score, level and matched phrases for one span of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub keywords: Vec<String>,
}

/// Score a span of text against the risk keyword table.
///
/// Each phrase counts once no matter how often it occurs. Matched phrases
/// are reported in table order, not text order.
pub fn assess_risk(text: &str) -> RiskAssessment {
    let text_lower = text.to_lowercase();

    let matched: Vec<_> = RISK_KEYWORDS
        .iter()
        .filter(|keyword| text_lower.contains(keyword.phrase))
        .collect();

    let score = matched
        .iter()
        .map(|keyword| keyword.weight)
        .sum::<u32>()
        .min(MAX_RISK_SCORE);

    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        keywords: matched.iter().map(|k| k.phrase.to_string()).collect(),
    }
}

/// Document-level score: the truncated mean of clause scores, 0 when empty.
pub fn document_risk(clause_scores: &[u32]) -> (u32, RiskLevel) {
    let total: u32 = clause_scores.iter().sum();
    let count = clause_scores.len().max(1) as u32;
    let average = total / count;
    (average, RiskLevel::from_score(average))
}
