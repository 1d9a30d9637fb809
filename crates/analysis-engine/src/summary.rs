//! Short document preview

/// Number of `.`-delimited segments kept in a summary
pub const SUMMARY_SEGMENTS: usize = 5;

/// Maximum summary length in characters before the ellipsis
pub const SUMMARY_MAX_CHARS: usize = 500;

/// First five `.`-delimited segments joined by a space, capped at 500
/// characters with a trailing `...` when cut.
pub fn generate_summary(text: &str) -> String {
    let summary = text
        .split('.')
        .take(SUMMARY_SEGMENTS)
        .collect::<Vec<_>>()
        .join(" ");

    if summary.chars().count() > SUMMARY_MAX_CHARS {
        let mut truncated: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        summary
    }
}
