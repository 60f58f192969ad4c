//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SubpathConfig (validated, immutable)
//!     → consumed by SubpathResolver at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the resolver takes its own copy
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LocaleConfig, NegotiationStrategy, SubpathConfig};
pub use validation::{validate_config, ValidationError};
