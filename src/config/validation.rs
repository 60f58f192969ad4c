//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale prefix table is usable under the active strategy
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SubpathConfig -> Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the resolver

use thiserror::Error;

use crate::config::schema::{NegotiationStrategy, SubpathConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("locale strategy is path-prefix but no active locale is set")]
    MissingActiveLocale,

    #[error("locale prefix for '{locale}' is empty")]
    EmptyPrefix { locale: String },

    #[error("locale prefix '{prefix}' for '{locale}' contains a slash")]
    PrefixContainsSlash { locale: String, prefix: String },
}

/// Check a configuration for semantic problems.
pub fn validate_config(config: &SubpathConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.locale.strategy == NegotiationStrategy::PathPrefix {
        if config.locale.active.is_empty() {
            errors.push(ValidationError::MissingActiveLocale);
        }
        for (locale, prefix) in &config.locale.prefixes {
            if prefix.is_empty() {
                errors.push(ValidationError::EmptyPrefix {
                    locale: locale.clone(),
                });
            } else if prefix.contains('/') {
                errors.push(ValidationError::PrefixContainsSlash {
                    locale: locale.clone(),
                    prefix: prefix.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LocaleConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SubpathConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = SubpathConfig {
            max_depth: 0,
            locale: LocaleConfig {
                strategy: NegotiationStrategy::PathPrefix,
                active: String::new(),
                prefixes: [("fr".to_string(), "fr/ca".to_string())].into(),
            },
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::MissingActiveLocale));
    }

    #[test]
    fn test_none_strategy_skips_prefix_checks() {
        let config = SubpathConfig {
            max_depth: 0,
            locale: LocaleConfig {
                strategy: NegotiationStrategy::None,
                active: String::new(),
                prefixes: [("fr".to_string(), String::new())].into(),
            },
        };
        assert!(validate_config(&config).is_ok());
    }
}
