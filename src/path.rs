//! Path normalization helpers.
//!
//! # Responsibilities
//! - Percent-decode raw request paths before any segment splitting
//! - Trim trailing slashes (paths are always processed without one)
//! - Split/join slash-delimited segments
//!
//! # Design Decisions
//! - Decoding is lossy UTF-8: an invalid escape never aborts resolution,
//!   the path simply fails to match anything downstream
//! - The leading slash is preserved by `join_segments`, never by `segments`

use percent_encoding::percent_decode_str;

/// Percent-decode `path` and strip any trailing slashes.
///
/// This is the canonical form every path takes before segment splitting.
pub fn normalize(path: &str) -> String {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    decoded.trim_end_matches('/').to_string()
}

/// Split an absolute path into its segments, dropping the leading slash.
///
/// An empty or root path yields no segments.
pub fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// Join segments back into an absolute path.
pub fn join_segments(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}
