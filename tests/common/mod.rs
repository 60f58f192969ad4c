//! Shared utilities for integration testing.

use std::sync::Arc;
use std::sync::Once;

use subpath_resolver::config::{LocaleConfig, NegotiationStrategy};
use subpath_resolver::{AliasMap, PathValidator, SubpathConfig, SubpathResolver};

/// Initialize tracing output once for the whole test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Build a resolver over the given alias pairs and validator.
pub fn resolver_with(
    pairs: &[(&str, &str)],
    validator: Arc<dyn PathValidator>,
    max_depth: usize,
) -> SubpathResolver {
    init_tracing();
    let aliases = AliasMap::new(pairs.iter().copied());
    let config = SubpathConfig {
        max_depth,
        ..Default::default()
    };
    SubpathResolver::new(Arc::new(aliases), validator, &config)
}

/// Config with the path-prefix locale strategy active for `locale`.
#[allow(dead_code)]
pub fn prefixed_locale_config(locale: &str, max_depth: usize) -> SubpathConfig {
    SubpathConfig {
        max_depth,
        locale: LocaleConfig {
            strategy: NegotiationStrategy::PathPrefix,
            active: locale.to_string(),
            prefixes: [(locale.to_string(), locale.to_string())].into(),
        },
    }
}
