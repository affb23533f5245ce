use std::sync::Once;

use crate::types::GeneralConfig;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the toggle engine's diagnostics.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used. Safe to call
/// more than once.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

/// `init_tracing` with the configured `general.log_filter` as the fallback.
pub fn init_tracing_from_config(config: &GeneralConfig) {
    init_tracing(&config.log_filter);
}
