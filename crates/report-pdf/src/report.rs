//! Report content: the fixed section order of an analysis report

use contract_types::ContractAnalysis;

use crate::layout::Block;

pub const REPORT_TITLE: &str = "Contract Analysis Report";
pub const NO_ISSUES: &str = "No major issues found";

/// Entities listed before the rest are cut off
pub const MAX_REPORT_ENTITIES: usize = 20;

/// Characters of clause text shown per clause
pub const CLAUSE_PREVIEW_CHARS: usize = 500;

/// Lay out the report sections in order: header, summary, compliance flags,
/// entities, then one block group per clause.
pub fn report_blocks(analysis: &ContractAnalysis, generated_at: &str) -> Vec<Block> {
    let mut blocks = vec![
        Block::title(REPORT_TITLE),
        Block::body(format!("Generated: {}", generated_at), 10.0),
        Block::body(format!("Language: {}", analysis.language), 10.0),
        Block::body(
            format!(
                "Risk Score: {} ({})",
                analysis.risk_score, analysis.risk_level
            ),
            20.0,
        ),
        Block::heading("Summary", 15.0),
        Block::body(analysis.summary.clone(), 20.0),
        Block::heading("Compliance Flags", 15.0),
    ];

    if analysis.compliance.is_empty() {
        blocks.push(Block::body(NO_ISSUES, 10.0));
    } else {
        blocks.extend(
            analysis
                .compliance
                .iter()
                .map(|flag| Block::body(format!("- {}", flag), 10.0)),
        );
    }

    blocks.push(Block::heading("Detected Entities", 15.0));
    blocks.extend(
        analysis
            .entities
            .iter()
            .take(MAX_REPORT_ENTITIES)
            .map(|e| Block::body(format!("{} ({})", e.text, e.label), 10.0)),
    );

    blocks.push(Block::heading("Clause Analysis", 20.0));
    for clause in &analysis.clauses {
        let preview: String = clause.text.chars().take(CLAUSE_PREVIEW_CHARS).collect();
        blocks.push(Block::heading(format!("Clause {}", clause.id), 10.0));
        blocks.push(Block::body(format!("{}...", preview), 10.0));
        blocks.push(Block::body(format!("Intent: {}", clause.intent), 10.0));
        blocks.push(Block::body(
            format!("Risk: {} ({})", clause.risk_level, clause.risk_score),
            15.0,
        ));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_types::{Clause, Entity, Intent, RiskLevel};
    use pretty_assertions::assert_eq;

    fn analysis() -> ContractAnalysis {
        ContractAnalysis {
            language: "eng".to_string(),
            risk_score: 60,
            risk_level: RiskLevel::Medium,
            entities: (0..25)
                .map(|i| Entity::new(format!("Party {}", i), "ORG"))
                .collect(),
            compliance: vec![],
            summary: "A short summary".to_string(),
            clauses: vec![Clause {
                id: 3,
                text: "x".repeat(600),
                intent: Intent::Obligation,
                risk_score: 60,
                risk_level: RiskLevel::Medium,
                keywords: vec!["indemnify".to_string(), "without notice".to_string()],
            }],
        }
    }

    fn texts(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_header_sections_in_order() {
        let blocks = report_blocks(&analysis(), "2024-01-01 10:00:00");
        let texts = texts(&blocks);
        assert_eq!(
            &texts[..8],
            &[
                REPORT_TITLE,
                "Generated: 2024-01-01 10:00:00",
                "Language: eng",
                "Risk Score: 60 (MEDIUM)",
                "Summary",
                "A short summary",
                "Compliance Flags",
                NO_ISSUES,
            ]
        );
    }

    #[test]
    fn test_entities_are_capped() {
        let blocks = report_blocks(&analysis(), "now");
        let entity_lines = texts(&blocks)
            .into_iter()
            .filter(|t| t.ends_with("(ORG)"))
            .count();
        assert_eq!(entity_lines, MAX_REPORT_ENTITIES);
    }

    #[test]
    fn test_clause_block() {
        let blocks = report_blocks(&analysis(), "now");
        let texts = texts(&blocks);
        let start = texts.iter().position(|t| *t == "Clause 3").unwrap();

        assert_eq!(texts[start + 1].chars().count(), CLAUSE_PREVIEW_CHARS + 3);
        assert_eq!(texts[start + 2], "Intent: Obligation");
        assert_eq!(texts[start + 3], "Risk: MEDIUM (60)");
        // Matched keywords stay in the JSON result only
        assert_eq!(texts.len(), start + 4);
        assert!(!texts.iter().any(|t| t.contains("indemnify")));
    }

    #[test]
    fn test_compliance_flags_listed() {
        let mut analysis = analysis();
        analysis.compliance = vec!["Unlimited liability may be unenforceable".to_string()];
        let blocks = report_blocks(&analysis, "now");
        assert!(texts(&blocks).contains(&"- Unlimited liability may be unenforceable"));
        assert!(!texts(&blocks).contains(&NO_ISSUES));
    }
}
