//! Logging utilities for the Storefront service.
//!
//! Every crate logs through `tracing`; the backend calls [`init_with_level`]
//! once at startup to install the subscriber.

use std::str::FromStr;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured first; the `storefront` target is then pinned to
/// `level`. Calling this more than once is harmless: later calls leave the
/// first subscriber in place.
pub fn init_with_level(level: Level) {
    // target directives match by prefix, so this covers every storefront_* crate
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("storefront={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Parses a configured level name, falling back to INFO for unknown values.
pub fn parse_level(name: Option<&str>) -> Level {
    match name {
        None => Level::INFO,
        Some(name) => Level::from_str(name).unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using info", name);
            Level::INFO
        }),
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => tracing::error!("{}: {}", error_context, e),
    }
    result
}
