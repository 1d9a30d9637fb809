//! Rule-based named-entity recognition
//!
//! Recognizes the entity kinds that matter in contracts (parties, amounts,
//! dates, durations, statutes) with a fixed regex table and reports them
//! with spaCy-style labels:
//!
//! | Label     | Example                         |
//! |-----------|---------------------------------|
//! | `ORG`     | `Acme Widgets Pvt. Ltd.`        |
//! | `MONEY`   | `$5,000`, `Rs. 1,00,000`        |
//! | `PERCENT` | `18%`, `2.5 percent`            |
//! | `DATE`    | `March 1, 2024`, `30 days`      |
//! | `LAW`     | `Indian Contract Act, 1872`     |

use contract_types::{Entity, EntityRecognizer};
use lazy_static::lazy_static;
use regex::Regex;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec";

lazy_static! {
    static ref ENTITY_PATTERNS: Vec<(&'static str, Regex)> = vec![
        (
            "ORG",
            Regex::new(
                r"\b(?:[A-Z][\w&'-]*\s+){0,4}[A-Z][\w&'-]*,?\s+(?:Pvt\.?\s+Ltd|Private\s+Limited|Inc|LLC|LLP|Ltd|Limited|Corp|Corporation)\b\.?"
            )
            .unwrap(),
        ),
        (
            "MONEY",
            Regex::new(
                r"(?i)(?:[$€£₹]\s?|\b(?:rs\.?|inr|usd|eur|gbp)\s?)\d+(?:,\d{2,3})*(?:\.\d+)?(?:\s(?:thousand|million|billion|lakhs?|crores?)\b)?|\b\d+(?:,\d{2,3})*(?:\.\d+)?\s(?:dollars|rupees|euros|pounds)\b"
            )
            .unwrap(),
        ),
        (
            "PERCENT",
            Regex::new(r"(?i)\b\d+(?:\.\d+)?\s?(?:%|percent\b|per\scent\b)").unwrap(),
        ),
        (
            "DATE",
            Regex::new(&format!(
                r"\b(?:(?:{m})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}|\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{m})\.?,?\s+\d{{4}}|\d{{1,2}}[/-]\d{{1,2}}[/-]\d{{2,4}}|\d{{4}}-\d{{2}}-\d{{2}}|\d+\s+(?:business\s+|calendar\s+|working\s+)?(?:days?|weeks?|months?|years?)\b)",
                m = MONTHS
            ))
            .unwrap(),
        ),
        (
            "LAW",
            Regex::new(r"\b(?:[A-Z][a-z]+\s+){1,5}Act\b(?:,?\s+\d{4})?").unwrap(),
        ),
    ];
}

/// A span found by one of the patterns
#[derive(Debug, Clone)]
struct Span {
    start: usize,
    end: usize,
    label: &'static str,
}

/// Entity recognizer backed by a fixed regex table.
///
/// The table is compiled once per process, so the recognizer is cheap to
/// construct and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEntityRecognizer;

impl PatternEntityRecognizer {
    pub fn new() -> Self {
        Self
    }

    /// Find entities in text order. Overlapping matches keep the one that
    /// starts first, or the longer one when both start together.
    pub fn find_entities(&self, text: &str) -> Vec<Entity> {
        let mut spans: Vec<Span> = ENTITY_PATTERNS
            .iter()
            .flat_map(|(label, pattern)| {
                let label = *label;
                pattern.find_iter(text).map(move |m| Span {
                    start: m.start(),
                    end: m.end(),
                    label,
                })
            })
            .collect();

        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut entities = Vec::new();
        let mut covered_until = 0;
        for span in spans {
            if span.start < covered_until {
                continue;
            }
            covered_until = span.end;
            entities.push(Entity::new(text[span.start..span.end].trim(), span.label));
        }

        entities
    }
}

impl EntityRecognizer for PatternEntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        self.find_entities(text)
    }
}
