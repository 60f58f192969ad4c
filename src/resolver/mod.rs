//! Subpath resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound:
//!     raw path + request path-info
//!         → locale prefix stripped, decoded, trailing slash trimmed
//!         → double-processing / re-entrancy guard
//!         → peel loop (alias resolver, inbound direction)
//!         → candidate re-validated against the route table
//!         → internal path (or input unchanged)
//!
//! Outbound:
//!     internal path
//!         → peel loop (alias resolver, outbound direction)
//!         → public path (or input unchanged)
//! ```
//!
//! # Design Decisions
//! - Longest prefix first, one segment at a time; first alias hit wins
//! - Inbound candidates are re-validated, outbound output is trusted
//! - All failure modes return the input path unchanged

pub mod context;
pub mod subpath;

pub use context::RequestContext;
pub use subpath::SubpathResolver;
