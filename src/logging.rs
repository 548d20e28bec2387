//! Logging setup for the CLI

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize stderr logging. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,chatlens={}", level)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // A second init (tests, embedding) is not fatal
    if Registry::default()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!("Logging initialized with level: {}", level);
    }
}
