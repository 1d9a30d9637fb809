//! Fixed keyword tables for risk scoring, intent and compliance checks

/// A phrase that adds a fixed weight to a risk score when present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskKeyword {
    pub phrase: &'static str,
    pub weight: u32,
}

/// Weight of a high-risk phrase
pub const HIGH_RISK_WEIGHT: u32 = 30;

/// Weight of a medium-risk phrase
pub const MEDIUM_RISK_WEIGHT: u32 = 15;

/// Upper bound of every risk score
pub const MAX_RISK_SCORE: u32 = 100;

const fn high(phrase: &'static str) -> RiskKeyword {
    RiskKeyword {
        phrase,
        weight: HIGH_RISK_WEIGHT,
    }
}

const fn medium(phrase: &'static str) -> RiskKeyword {
    RiskKeyword {
        phrase,
        weight: MEDIUM_RISK_WEIGHT,
    }
}

/// Risk phrases in reporting order: all high-risk phrases, then medium-risk.
pub const RISK_KEYWORDS: &[RiskKeyword] = &[
    high("unlimited liability"),
    high("non compete"),
    high("penalty"),
    high("terminate anytime"),
    high("without notice"),
    high("indemnify"),
    high("exclusive"),
    medium("lock in"),
    medium("arbitration"),
    medium("auto renew"),
    medium("jurisdiction"),
    medium("confidentiality"),
];

/// Negated modals that mark a prohibition
pub const PROHIBITION_KEYWORDS: &[&str] = &["shall not", "must not"];

/// Modals that mark a duty
pub const OBLIGATION_KEYWORDS: &[&str] = &["shall", "must"];

/// Modals that mark a permission
pub const RIGHT_KEYWORDS: &[&str] = &["may", "can"];

/// A phrase whose presence raises a jurisdiction-specific advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceRule {
    pub trigger: &'static str,
    pub note: &'static str,
}

/// Compliance rules (Indian law) in reporting order
pub const COMPLIANCE_RULES: &[ComplianceRule] = &[
    ComplianceRule {
        trigger: "non compete",
        note: "Non-compete validity under Indian Contract Act",
    },
    ComplianceRule {
        trigger: "unlimited liability",
        note: "Unlimited liability may be unenforceable",
    },
    ComplianceRule {
        trigger: "no termination",
        note: "Termination restriction may violate labor laws",
    },
];

/// True if the (already lowercased) text contains any of the keywords
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}
