//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so minimal configs work.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::LocaleNegotiation;

/// Root configuration for subpath resolution.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SubpathConfig {
    /// Maximum number of trailing segments peeled before giving up.
    /// `0` means unbounded (peel until one segment remains).
    pub max_depth: usize,

    /// Locale-negotiation settings.
    pub locale: LocaleConfig,
}

/// Locale-negotiation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LocaleConfig {
    /// Active negotiation strategy.
    pub strategy: NegotiationStrategy,

    /// Identifier of the locale active for the current request.
    pub active: String,

    /// Per-locale URL prefix table (locale id -> prefix string).
    pub prefixes: HashMap<String, String>,
}

/// How the active locale is negotiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NegotiationStrategy {
    /// Paths carry no locale prefix.
    #[default]
    None,
    /// Locale is carried as a URL prefix segment.
    PathPrefix,
}

impl LocaleConfig {
    /// Build the runtime negotiation value the resolver consumes.
    pub fn negotiation(&self) -> LocaleNegotiation {
        match self.strategy {
            NegotiationStrategy::None => LocaleNegotiation::None,
            NegotiationStrategy::PathPrefix => LocaleNegotiation::PathPrefix {
                active: self.active.clone(),
                prefixes: self.prefixes.clone(),
            },
        }
    }
}
