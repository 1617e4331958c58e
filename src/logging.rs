use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Diagnostics settings. Logs go to stderr; stdout is reserved for the report.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_level: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: true,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `config.log_level`.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
