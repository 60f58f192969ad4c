//! Route validity seam.
//!
//! # Responsibilities
//! - Answer whether a candidate internal path maps to a real route
//!
//! # Design Decisions
//! - Routability only: access control is explicitly not this layer's job
//! - Blanket impl for closures so callers and tests can inject a function
//!   instead of defining a type

/// Reports whether a path resolves to a real, routable destination.
///
/// Implementations must not perform access checks; the resolver treats a
/// `true` answer as "this route exists", nothing more.
pub trait PathValidator: Send + Sync {
    /// True iff `path` maps to a real route.
    fn is_valid(&self, path: &str) -> bool;
}

impl<F> PathValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, path: &str) -> bool {
        self(path)
    }
}

/// Validator that accepts every path. Useful when outbound-style trust is
/// wanted on the inbound side as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PathValidator for AcceptAll {
    fn is_valid(&self, _path: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_validator() {
        let validator = |path: &str| path.starts_with("/node/");
        assert!(validator.is_valid("/node/5"));
        assert!(!validator.is_valid("/blog/post-1"));
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.is_valid("/anything"));
    }
}
