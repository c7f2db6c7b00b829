//! Logging setup.
//!
//! Events always go to stderr so the terminal chat on stdout stays readable.
//! Noisy HTTP stack modules are held at `warn` unless `RUST_LOG` says otherwise.

use crate::config::LogFormat;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Library modules that are only interesting when something is wrong.
pub const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "h2", "tower_http"];

/// Build the filter, preferring `RUST_LOG` when it is set.
fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{}=warn", module));
    }

    EnvFilter::new(directives)
}

/// Initialize the global subscriber. Calling it twice is harmless.
pub fn init_logging(log_level: &str, log_format: LogFormat) {
    let subscriber = tracing_subscriber::registry().with(build_filter(log_level));

    match log_format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr);
            let _ = subscriber.with(fmt_layer).try_init();
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            let _ = subscriber.with(fmt_layer).try_init();
        }
    }
}
