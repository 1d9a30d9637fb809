//! Document language detection

use contract_types::{LanguageDetector, UNKNOWN_LANGUAGE};
use tracing::debug;

/// Trigram-based detector returning ISO 639-3 codes (e.g. `eng`, `hin`)
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> String {
        match whatlang::detect(text) {
            Some(info) => {
                debug!(
                    "Detected language {} (confidence {:.2})",
                    info.lang().code(),
                    info.confidence()
                );
                info.lang().code().to_string()
            }
            None => UNKNOWN_LANGUAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let text = "The vendor shall deliver the goods to the client within thirty days \
                    of receiving the purchase order, and the client shall pay the invoice.";
        assert_eq!(WhatlangDetector::new().detect(text), "eng");
    }

    #[test]
    fn test_undetectable_text_is_unknown() {
        assert_eq!(WhatlangDetector::new().detect(""), UNKNOWN_LANGUAGE);
        assert_eq!(WhatlangDetector::new().detect("12345 !!! 678"), UNKNOWN_LANGUAGE);
    }
}
