//! Jurisdiction-specific compliance advisories

use crate::patterns::COMPLIANCE_RULES;

/// Check the full document text against the compliance rules.
///
/// Notes come back in rule order, each at most once. An empty result means
/// no issues were found.
pub fn check_compliance(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    COMPLIANCE_RULES
        .iter()
        .filter(|rule| text_lower.contains(rule.trigger))
        .map(|rule| rule.note.to_string())
        .collect()
}
