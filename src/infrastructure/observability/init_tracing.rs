use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Directive used when `RUST_LOG` is unset: the configured level everywhere,
/// debug for this crate and the HTTP layer.
pub fn default_directive(level: &str) -> String {
    format!("{level},triscribe=debug,tower_http=debug")
}

/// Installs the global subscriber. Call once, before the router is built.
pub fn init_tracing(config: TracingConfig, port: u16) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)));

    // Exactly one of the two fmt layers is active.
    let (json_layer, text_layer) = if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    tracing::info!(
        port,
        environment = %config.environment,
        level = %config.level,
        json_format = config.json_format,
        "triscribe starting"
    );
}
