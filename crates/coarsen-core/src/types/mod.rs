//! Shared closed enums and collection aliases.

pub mod collections;
pub mod format;
pub mod matching;
pub mod similarity;

pub use format::OutputFormat;
pub use matching::MatchingStrategy;
pub use similarity::SimilarityMeasure;

/// Normalize a user-supplied method name: trimmed, lowercase,
/// with spaces and dashes folded into underscores.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
