//! Subpath resolution engine.
//!
//! # Responsibilities
//! - Peel trailing segments off a path, longest prefix first, until the
//!   alias resolver reports a translation
//! - Reassemble translated prefix + peeled suffix
//! - Re-validate inbound candidates against the route table
//! - Guard against re-entrant inbound resolution triggered by validation
//!
//! # Design Decisions
//! - First hit wins: the first peel depth at which the alias resolver
//!   changes the prefix is the only candidate ever tried, even if it later
//!   fails validation (no backtracking to shallower depths)
//! - Failure is expressed as "input returned unchanged", never as an error
//! - The re-entrancy flag is cleared by a Drop guard, so a panicking
//!   validity oracle cannot leave the resolver stuck in "resolving" state
//! - One resolver instance per in-flight request: the flag is atomic but
//!   the guard protocol is not meant to be shared across concurrent requests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::alias::{AliasResolver, Direction};
use crate::config::SubpathConfig;
use crate::locale::{strip_locale_prefix, LocaleNegotiation};
use crate::path;
use crate::resolver::context::RequestContext;
use crate::validity::PathValidator;

/// Two-directional subpath resolver.
///
/// Inbound: public path -> internal path, validated. Outbound: internal
/// path -> public alias, trusted. Both directions share one peel loop.
pub struct SubpathResolver {
    aliases: Arc<dyn AliasResolver>,
    validator: Arc<dyn PathValidator>,
    negotiation: LocaleNegotiation,
    max_depth: usize,
    resolving: AtomicBool,
}

impl SubpathResolver {
    /// Create a resolver from its collaborators and configuration.
    pub fn new(
        aliases: Arc<dyn AliasResolver>,
        validator: Arc<dyn PathValidator>,
        config: &SubpathConfig,
    ) -> Self {
        Self {
            aliases,
            validator,
            negotiation: config.locale.negotiation(),
            max_depth: config.max_depth,
            resolving: AtomicBool::new(false),
        }
    }

    /// Substitute the validity oracle after construction.
    pub fn set_validator(&mut self, validator: Arc<dyn PathValidator>) {
        self.validator = validator;
    }

    /// Resolve a public-facing path into its internal form.
    ///
    /// Returns `path` unchanged when it is not a subpath alias, when an
    /// earlier processor already rewrote the request path, or when called
    /// re-entrantly from inside a validity check.
    pub fn resolve_inbound(&self, path: &str, request: &RequestContext) -> String {
        let request_path = strip_locale_prefix(&self.negotiation, request.path_info());
        // An already-rewritten request path means some earlier stage handled
        // this request; a set flag means we are inside our own validity check.
        if request_path != path || self.resolving.load(Ordering::Relaxed) {
            return path.to_string();
        }

        let Some(candidate) = self.peel(path, Direction::Inbound) else {
            return path.to_string();
        };

        if self.validate_candidate(&candidate) {
            tracing::debug!(path, candidate = %candidate, "Resolved inbound subpath");
            candidate
        } else {
            tracing::trace!(path, candidate = %candidate, "Subpath candidate failed validation");
            path.to_string()
        }
    }

    /// Resolve an internal path into its public-facing form.
    ///
    /// Trusts the alias resolver directly: the first changed translation is
    /// returned with the peeled suffix reattached, unvalidated.
    pub fn resolve_outbound(&self, path: &str) -> String {
        match self.peel(path, Direction::Outbound) {
            Some(alias) => {
                tracing::debug!(path, alias = %alias, "Resolved outbound subpath");
                alias
            }
            None => path.to_string(),
        }
    }

    /// Shared peel loop.
    ///
    /// Shrinks the path one trailing segment at a time, translating each
    /// prefix, until the resolver reports a change, the depth budget runs
    /// out, or only one segment remains. Returns the reassembled candidate
    /// on the first change, `None` otherwise.
    fn peel(&self, path: &str, direction: Direction) -> Option<String> {
        let mut remaining = path::segments(path);
        let mut peeled: Vec<&str> = Vec::new();
        let mut iterations = 0;

        loop {
            if self.max_depth != 0 && iterations == self.max_depth {
                return None;
            }
            iterations += 1;

            // Empty path: nothing to peel at all.
            peeled.push(remaining.pop()?);
            // Peeling must keep at least one segment in the prefix.
            if remaining.is_empty() {
                return None;
            }

            let prefix = path::join_segments(&remaining);
            let translated = self.aliases.translate(&prefix, direction);
            if translated != prefix {
                tracing::trace!(
                    prefix = %prefix,
                    translated = %translated,
                    depth = iterations,
                    "Alias hit while peeling"
                );
                let suffix: Vec<&str> = peeled.iter().rev().copied().collect();
                return Some(format!("{}/{}", translated, suffix.join("/")));
            }
            // No change: continue peeling from the shrunk prefix, which
            // `remaining` already holds.
        }
    }

    /// Ask the validity oracle about a candidate, with the re-entrancy flag
    /// held for the duration of the call.
    fn validate_candidate(&self, candidate: &str) -> bool {
        let _guard = ResolvingGuard::enter(&self.resolving);
        self.validator.is_valid(candidate)
    }
}

/// Scope guard for the re-entrancy flag.
///
/// Sets the flag on entry; `Drop` clears it on every exit path, including
/// unwinding out of a panicking validator.
struct ResolvingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ResolvingGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Relaxed);
        Self { flag }
    }
}

impl Drop for ResolvingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
