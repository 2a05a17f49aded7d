//! Fuzzy name matching between directory names and project-file stems.
//!
//! Project files are conventionally named after the directory they belong
//! to, but rarely exactly (`my-app` vs `my_app`, dropped suffixes, stray
//! version tags). A similarity ratio absorbs that drift without matching
//! unrelated names.

#[cfg(test)]
mod tests;

/// Similarity ratio two names must strictly exceed to count as a match.
pub const SIMILARITY_THRESHOLD: f64 = 75.0;

/// Whether two names are similar enough to be considered the same project.
///
/// The ratio is a normalized Levenshtein similarity on a 0-100 scale,
/// case-sensitive, compared strictly against [`SIMILARITY_THRESHOLD`]:
/// a ratio of exactly 75 does not match.
#[must_use]
pub fn similar(a: &str, b: &str) -> bool {
    ratio(a, b) > SIMILARITY_THRESHOLD
}

/// Normalized Levenshtein similarity scaled to 0-100.
fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}
