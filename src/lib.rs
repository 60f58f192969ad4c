//! Subpath alias resolution library.
//!
//! Resolves URL paths composed of a registered alias plus extra trailing
//! segments, in both directions: public path to internal path (validated)
//! and internal path to public alias (trusted). The alias store and the
//! route-validity oracle are injected collaborators.

pub mod alias;
pub mod config;
pub mod locale;
pub mod path;
pub mod resolver;
pub mod validity;

pub use alias::{AliasMap, AliasResolver, Direction};
pub use config::{load_config, ConfigError, SubpathConfig};
pub use locale::LocaleNegotiation;
pub use resolver::{RequestContext, SubpathResolver};
pub use validity::{AcceptAll, PathValidator};
