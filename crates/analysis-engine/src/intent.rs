//! Modal-keyword intent classification

use contract_types::Intent;

use crate::patterns::{contains_any, OBLIGATION_KEYWORDS, PROHIBITION_KEYWORDS, RIGHT_KEYWORDS};

/// Classify a clause by the modals it contains.
///
/// Negated modals are checked before bare ones, since "shall not" also
/// contains "shall".
pub fn classify_intent(text: &str) -> Intent {
    let text_lower = text.to_lowercase();

    if contains_any(&text_lower, PROHIBITION_KEYWORDS) {
        Intent::Prohibition
    } else if contains_any(&text_lower, OBLIGATION_KEYWORDS) {
        Intent::Obligation
    } else if contains_any(&text_lower, RIGHT_KEYWORDS) {
        Intent::Right
    } else {
        Intent::Neutral
    }
}
