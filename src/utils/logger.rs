// src/utils/logger.rs

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a console subscriber honoring `RUST_LOG`-style directives
/// (e.g. `"info"` or `"survey_analytics=debug"`).
///
/// Entirely optional: embedders that configure their own subscriber
/// should not call this. Calling it twice is a no-op.
pub fn init_logging(directives: &str) {
    let env_filter = EnvFilter::new(directives);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init();
}
