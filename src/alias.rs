//! Alias translation seam.
//!
//! # Responsibilities
//! - Define the bidirectional alias <-> internal-path contract
//! - Provide an in-memory implementation for embedding and tests
//!
//! # Design Decisions
//! - "No alias" is expressed by returning the input unchanged, never by an
//!   error: the resolver only reacts to whether the input changed
//! - Alias discovery is out of scope; implementors own their storage

use std::collections::HashMap;

/// Which way a translation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Public alias to internal path.
    Inbound,
    /// Internal path to public alias.
    Outbound,
}

/// Bidirectional alias translation.
///
/// Both methods return the input unchanged when no translation applies.
pub trait AliasResolver: Send + Sync {
    /// Translate a public alias into its internal path.
    fn to_internal(&self, alias: &str) -> String;

    /// Translate an internal path into its public alias.
    fn to_alias(&self, path: &str) -> String;

    /// Translate in the given direction.
    fn translate(&self, path: &str, direction: Direction) -> String {
        match direction {
            Direction::Inbound => self.to_internal(path),
            Direction::Outbound => self.to_alias(path),
        }
    }
}

/// In-memory bidirectional alias store.
///
/// Keeps both lookup directions as maps; immutable after construction.
#[derive(Debug, Default)]
pub struct AliasMap {
    by_alias: HashMap<String, String>,
    by_path: HashMap<String, String>,
}

impl AliasMap {
    /// Build an alias map from `(alias, internal_path)` pairs.
    ///
    /// On duplicate aliases or duplicate internal paths, the last pair wins.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut map = Self::default();
        for (alias, path) in pairs {
            map.insert(alias, path);
        }
        map
    }

    /// Register one alias for one internal path.
    pub fn insert(&mut self, alias: impl Into<String>, path: impl Into<String>) {
        let alias = alias.into();
        let path = path.into();
        self.by_alias.insert(alias.clone(), path.clone());
        self.by_path.insert(path, alias);
    }
}

impl AliasResolver for AliasMap {
    fn to_internal(&self, alias: &str) -> String {
        self.by_alias
            .get(alias)
            .cloned()
            .unwrap_or_else(|| alias.to_string())
    }

    fn to_alias(&self, path: &str) -> String {
        self.by_path
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_paths_pass_through() {
        let map = AliasMap::default();
        assert_eq!(map.to_internal("/blog/post-1"), "/blog/post-1");
        assert_eq!(map.to_alias("/node/5"), "/node/5");
    }

    #[test]
    fn test_both_directions() {
        let map = AliasMap::new([("/blog/post-1", "/node/5")]);
        assert_eq!(map.to_internal("/blog/post-1"), "/node/5");
        assert_eq!(map.to_alias("/node/5"), "/blog/post-1");
        assert_eq!(map.translate("/blog/post-1", Direction::Inbound), "/node/5");
        assert_eq!(map.translate("/node/5", Direction::Outbound), "/blog/post-1");
    }
}
