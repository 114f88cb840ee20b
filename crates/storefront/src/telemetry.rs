//! Tracing and Sentry initialization.

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, SiteConfig};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "tiffin_storefront=info";

/// Initialize Sentry error tracking and return guard that must be kept alive.
#[must_use]
pub fn init_sentry(config: &SiteConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the global tracing subscriber (and Sentry, if configured).
///
/// Returns the Sentry guard, which must be held for the life of the process.
/// Calling this twice is harmless: the second subscriber is not installed.
#[must_use]
pub fn init(config: &SiteConfig) -> Option<sentry::ClientInitGuard> {
    // Sentry must be initialized before the tracing subscriber
    let guard = init_sentry(config);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (json, pretty) = match config.log_format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Pretty => (None, Some(tracing_subscriber::fmt::layer())),
    };

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {e}");
    }

    guard
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_dsn_is_idempotent() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert!(init(&config).is_none());
        assert!(init(&config).is_none());
    }
}
