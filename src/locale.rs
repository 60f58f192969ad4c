//! Locale URL-prefix extraction.
//!
//! # Responsibilities
//! - Model the active locale-negotiation strategy
//! - Strip the active locale's URL prefix from a raw path-info string
//!
//! # Design Decisions
//! - Only the path-prefix strategy ever strips anything; any other strategy
//!   reduces to decode + trailing-slash trim
//! - Prefix lookup is keyed by the configured table, not derived from the
//!   locale id itself

use std::collections::HashMap;

use crate::path;

/// Active locale-negotiation strategy, as read from site configuration.
#[derive(Debug, Clone, Default)]
pub enum LocaleNegotiation {
    /// No prefix-based negotiation; paths carry no locale prefix.
    #[default]
    None,
    /// Locale is negotiated from a URL prefix segment.
    PathPrefix {
        /// Identifier of the locale active for the current request.
        active: String,
        /// Per-locale URL prefix table (locale id -> prefix string).
        prefixes: HashMap<String, String>,
    },
}

impl LocaleNegotiation {
    /// The URL prefix configured for the active locale, if any.
    fn active_prefix(&self) -> Option<&str> {
        match self {
            LocaleNegotiation::None => None,
            LocaleNegotiation::PathPrefix { active, prefixes } => prefixes
                .get(active)
                .map(String::as_str)
                .filter(|p| !p.is_empty()),
        }
    }
}

/// Strip the active locale's URL prefix from `path_info`, then
/// percent-decode and trim any trailing slash.
///
/// The prefix is removed only when `path_info` begins with `/<prefix>/`;
/// a path that *equals* the prefix segment is left alone.
pub fn strip_locale_prefix(negotiation: &LocaleNegotiation, path_info: &str) -> String {
    let stripped = match negotiation.active_prefix() {
        Some(prefix) => {
            let marker = format!("/{prefix}/");
            match path_info.strip_prefix(&marker) {
                Some(rest) => format!("/{rest}"),
                None => path_info.to_string(),
            }
        }
        None => path_info.to_string(),
    };
    path::normalize(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> LocaleNegotiation {
        LocaleNegotiation::PathPrefix {
            active: "fr".to_string(),
            prefixes: HashMap::from([("fr".to_string(), "fr".to_string())]),
        }
    }

    #[test]
    fn test_strips_active_prefix() {
        assert_eq!(
            strip_locale_prefix(&french(), "/fr/blog/post-1/comments"),
            "/blog/post-1/comments"
        );
    }

    #[test]
    fn test_prefix_must_be_followed_by_slash() {
        // "/fr" alone is a path, not a prefixed path.
        assert_eq!(strip_locale_prefix(&french(), "/fr"), "/fr");
        assert_eq!(strip_locale_prefix(&french(), "/france/x"), "/france/x");
    }

    #[test]
    fn test_no_table_only_normalizes() {
        assert_eq!(
            strip_locale_prefix(&LocaleNegotiation::None, "/fr/blog%20x/"),
            "/fr/blog x"
        );
    }

    #[test]
    fn test_inactive_locale_prefix_not_stripped() {
        let negotiation = LocaleNegotiation::PathPrefix {
            active: "de".to_string(),
            prefixes: HashMap::from([("fr".to_string(), "fr".to_string())]),
        };
        assert_eq!(
            strip_locale_prefix(&negotiation, "/fr/blog/post-1"),
            "/fr/blog/post-1"
        );
    }
}
