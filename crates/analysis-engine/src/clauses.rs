//! Clause segmentation on numbered-list markers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A newline, optional indentation, a number, `.` or `)`, then whitespace.
    static ref CLAUSE_MARKER: Regex = Regex::new(r"\n\s*\d+[.)]\s+").unwrap();
}

/// Fragments at or below this many characters (after trimming) are noise
pub const MIN_CLAUSE_CHARS: usize = 50;

/// A clause fragment before intent and risk are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseCandidate {
    pub id: usize,
    pub text: String,
}

/// Split document text into clause candidates.
///
/// Ids are the 1-based position of the fragment in the raw split, so they
/// skip the positions of dropped fragments.
pub fn split_clauses(text: &str) -> Vec<ClauseCandidate> {
    CLAUSE_MARKER
        .split(text)
        .enumerate()
        .filter_map(|(index, part)| {
            let trimmed = part.trim();
            if trimmed.chars().count() > MIN_CLAUSE_CHARS {
                Some(ClauseCandidate {
                    id: index + 1,
                    text: trimmed.to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const LONG_A: &str = "The vendor shall indemnify the client for all losses without notice.";
    const LONG_B: &str = "Either party may terminate this agreement with thirty days written notice.";

    #[test]
    fn test_splits_on_numbered_markers() {
        let text = format!("1. {}\n2. {}", LONG_A, LONG_B);
        let clauses = split_clauses(&text);

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].id, 1);
        // The first marker has no preceding newline and stays in the text
        assert_eq!(clauses[0].text, format!("1. {}", LONG_A));
        assert_eq!(clauses[1].id, 2);
        assert_eq!(clauses[1].text, LONG_B);
    }

    #[test]
    fn test_parenthesis_and_indented_markers() {
        let text = format!("Preamble\n 1) {}\n\t2)  {}", LONG_A, LONG_B);
        let clauses = split_clauses(&text);

        assert_eq!(
            clauses,
            vec![
                ClauseCandidate {
                    id: 2,
                    text: LONG_A.to_string()
                },
                ClauseCandidate {
                    id: 3,
                    text: LONG_B.to_string()
                },
            ]
        );
    }

    #[test]
    fn test_ids_keep_gaps_of_dropped_fragments() {
        let text = format!("AGREEMENT\n1. {}\n2. Definitions\n3. {}", LONG_A, LONG_B);
        let ids: Vec<usize> = split_clauses(&text).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_marker_requires_trailing_whitespace() {
        let text = format!("{}\n3.5% interest applies to every late payment made hereunder.", LONG_A);
        let clauses = split_clauses(&text);
        assert_eq!(clauses.len(), 1);
    }

    #[test]
    fn test_unnumbered_text_is_one_clause() {
        let text = "This agreement is entered into by and between the parties named below on the date written.";
        let clauses = split_clauses(text);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].id, 1);
        assert_eq!(clauses[0].text, text);
    }

    #[test]
    fn test_short_or_empty_text_yields_nothing() {
        assert!(split_clauses("").is_empty());
        assert!(split_clauses("Short contract.").is_empty());
        // Exactly 50 characters is still noise
        assert!(split_clauses(&"x".repeat(50)).is_empty());
        assert_eq!(split_clauses(&"x".repeat(51)).len(), 1);
    }

    #[test]
    fn test_length_is_measured_in_characters() {
        // 30 two-byte characters are 60 bytes but only 30 characters
        assert!(split_clauses(&"é".repeat(30)).is_empty());
    }

    proptest! {
        #[test]
        fn never_emits_short_fragments(text in "[a-z \n0-9.)]{0,400}") {
            for clause in split_clauses(&text) {
                prop_assert!(clause.text.trim().chars().count() > MIN_CLAUSE_CHARS);
            }
        }

        #[test]
        fn ids_are_strictly_increasing(text in "([a-z ]{0,80}\n[0-9]{1,2}[.)] ){0,6}[a-z ]{0,80}") {
            let ids: Vec<usize> = split_clauses(&text).iter().map(|c| c.id).collect();
            prop_assert!(ids.iter().all(|&id| id >= 1));
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
