use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// The filter comes from `RUST_LOG` when set and valid, otherwise from
/// `default_level`.
///
/// # Arguments
///
/// * `default_level` - Log level used without `RUST_LOG` (e.g. "info", "debug")
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| {
            eprintln!("Invalid log level '{}', defaulting to 'info'", default_level);
            EnvFilter::new("info")
        })
    });

    let stdout_layer = fmt::layer().with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}
